//! Converter strategies keyed by bit width.
//!
//! Every type the generator knows about marshals through one of four strategies: a 0-bit strategy for opaque or
//! absent values (`void`, pointers treated as handles) and 8/16/32-bit strategies for scalars. The strategies are
//! process-wide singletons; descriptors borrow them rather than owning a copy.
//!
//! ## Examples
//! ```rust
//! use emugen_core::converters;
//!
//! let conv = converters::for_width(16).unwrap();
//! assert_eq!(conv.bits(), 16);
//! assert_eq!(conv.size_bytes(), 2);
//! assert!(converters::for_width(7).is_none());
//! ```

/// Bit widths that have a converter, in ascending order.
pub const SUPPORTED_WIDTHS: &[u32] = &[0, 8, 16, 32];

/// A marshalling strategy for values of one bit-width class.
///
/// Instances only exist as the statics in this module ([`VAR0`], [`VAR8`], [`VAR16`], [`VAR32`]).
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct VarConverter {
    name: &'static str,
    bits: u32,
}

impl VarConverter {
    /// Short name of the strategy (e.g. `"var32"`), used in listings.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Width class in bits.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Number of bytes a value of this class occupies on the wire.
    pub fn size_bytes(&self) -> usize {
        (self.bits / 8) as usize
    }
}

pub static VAR0: VarConverter = VarConverter { name: "var0", bits: 0 };
pub static VAR8: VarConverter = VarConverter { name: "var8", bits: 8 };
pub static VAR16: VarConverter = VarConverter { name: "var16", bits: 16 };
pub static VAR32: VarConverter = VarConverter { name: "var32", bits: 32 };

/// All converters, ordered like [`SUPPORTED_WIDTHS`].
pub static CONVERTERS: [&VarConverter; 4] = [&VAR0, &VAR8, &VAR16, &VAR32];

/// Select the converter for a bit width.
///
/// ## Returns
/// - `Some(&'static VarConverter)` for 0, 8, 16 or 32.
/// - `None` for any other width, including negative ones.
pub fn for_width(bits: i64) -> Option<&'static VarConverter> {
    match bits {
        0 => Some(&VAR0),
        8 => Some(&VAR8),
        16 => Some(&VAR16),
        32 => Some(&VAR32),
        _ => None,
    }
}
