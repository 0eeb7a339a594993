use super::*;

fn compile(kind: ShaderKind, source: &str) -> CompileOutput {
    ReferenceCompiler::new().compile(kind, source)
}

// ============================================================================
// Accepted sources
// ============================================================================

#[test]
fn test_minimal_main_compiles() {
    let out = compile(ShaderKind::Vertex, "void main(){}");
    assert!(out.success);
    assert!(out.info_log.is_none());
}

#[test]
fn test_binary_is_tagged_with_stage() {
    let vert = compile(ShaderKind::Vertex, "void main(){}").binary.unwrap();
    let frag = compile(ShaderKind::Fragment, "void main(){}").binary.unwrap();

    assert_eq!(&vert[..4], REFERENCE_BINARY_MAGIC);
    assert_eq!(vert[4], 0);
    assert_eq!(frag[4], 1);
    assert_eq!(&vert[5..], b"void main(){}");
}

#[test]
fn test_realistic_fragment_shader() {
    let source = "precision mediump float;\n\
                  uniform sampler2D u_tex; // albedo\n\
                  varying vec2 v_uv;\n\
                  /* entry\n point */\n\
                  void main() {\n\
                      gl_FragColor = texture2D(u_tex, v_uv) * vec4(1.0, 1.0, 1.0, 1.0);\n\
                  }\n";
    assert!(compile(ShaderKind::Fragment, source).success);
}

#[test]
fn test_brackets_inside_comments_are_ignored() {
    let source = "// {{{\nvoid main() { /* ) */ }";
    assert!(compile(ShaderKind::Vertex, source).success);
}

// ============================================================================
// Rejected sources
// ============================================================================

#[test]
fn test_missing_main_reports_entry_point() {
    let out = compile(ShaderKind::Fragment, "void helper() {}");
    assert!(!out.success);
    assert!(out.binary.is_none());
    let log = out.info_log.unwrap();
    assert!(log.contains("Missing entry point"));
    assert!(log.contains("fragment stage"));
}

#[test]
fn test_main_as_part_of_identifier_is_not_an_entry_point() {
    let out = compile(ShaderKind::Vertex, "void domain() {} float mainly;");
    assert!(!out.success);
}

#[test]
fn test_unbalanced_close_reports_line() {
    let out = compile(ShaderKind::Vertex, "void main() {\n}\n}");
    assert!(!out.success);
    let log = out.info_log.unwrap();
    assert!(log.contains("ERROR: 0:3: '}'"), "unexpected log: {}", log);
    assert!(log.contains("1 compilation errors"));
}

#[test]
fn test_unclosed_open_reports_end_of_file() {
    let out = compile(ShaderKind::Vertex, "void main() {\n  vec4 a = vec4(1.0;\n");
    assert!(!out.success);
    assert!(out.info_log.unwrap().contains("unexpected end of file"));
}

#[test]
fn test_unterminated_comment() {
    let out = compile(ShaderKind::Vertex, "void main() {} /* trailing");
    assert!(!out.success);
    assert!(out.info_log.unwrap().contains("unterminated comment"));
}

#[test]
fn test_empty_source_fails() {
    assert!(!compile(ShaderKind::Vertex, "").success);
}
