//! Introspection helpers shared by the query entry points
//!
//! String results follow the fixed buffer-return contract: copy at most
//! `bufsize - 1` bytes, always terminate, never write past `bufsize`.
//! Precision formats are derived from the numeric limits of the types the
//! backend uses to represent each precision qualifier.

use crate::error::{Error, Result};
use crate::types::{
    GLchar, GLenum, GLint, GLsizei,
    GL_HIGH_FLOAT, GL_HIGH_INT, GL_LOW_FLOAT, GL_LOW_INT, GL_MEDIUM_FLOAT, GL_MEDIUM_INT,
};

/// Copy `text` into `dst` under the buffer-return contract
///
/// The effective capacity is `bufsize`, further clamped to `dst.len()`.
/// `length` receives the number of bytes written, terminator excluded; it is
/// 0 (and nothing is written) when `text` is `None`. Bytes are copied
/// verbatim, whatever their encoding.
pub fn write_terminated(
    text: Option<&[GLchar]>,
    bufsize: GLsizei,
    length: Option<&mut GLsizei>,
    dst: &mut [GLchar],
) {
    let Some(text) = text else {
        if let Some(length) = length {
            *length = 0;
        }
        return;
    };

    let capacity = usize::try_from(bufsize).unwrap_or(0).min(dst.len());
    let total = text.len() + 1;
    let returned = capacity.min(total).saturating_sub(1);

    if let Some(length) = length {
        *length = GLsizei::try_from(returned).unwrap_or(GLsizei::MAX);
    }

    if capacity == 0 {
        return;
    }
    dst[..returned].copy_from_slice(&text[..returned]);
    dst[returned] = 0;
}

/// Range and precision reported for one precision qualifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecisionFormat {
    /// log2 of the smallest and largest representable magnitudes
    pub range: [GLint; 2],
    /// Bits of precision (0 for integer types)
    pub precision: GLint,
}

/// Precision format for a precision-type enumerant
///
/// All float qualifiers map to 32-bit floats. Low and medium ints map to
/// 16-bit integers, high ints to 32-bit integers.
pub fn precision_format(precisiontype: GLenum) -> Result<PrecisionFormat> {
    match precisiontype {
        GL_LOW_FLOAT | GL_MEDIUM_FLOAT | GL_HIGH_FLOAT => Ok(float_format()),
        GL_LOW_INT | GL_MEDIUM_INT => Ok(int_format(i16::MAX as f64)),
        GL_HIGH_INT => Ok(int_format(i32::MAX as f64)),
        _ => crate::gl_bail!(Error::InvalidEnum, "Unknown precision type 0x{:04X}", precisiontype),
    }
}

fn float_format() -> PrecisionFormat {
    // f64 so that log2(f32::MAX) does not round up to 128
    let range = (f32::MAX as f64).log2().floor() as GLint;
    let precision = (-(f32::EPSILON as f64).log2()).floor() as GLint;
    PrecisionFormat {
        range: [range, range],
        precision,
    }
}

fn int_format(max: f64) -> PrecisionFormat {
    let range = max.log2().floor() as GLint;
    PrecisionFormat {
        range: [range, range],
        precision: 0,
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
