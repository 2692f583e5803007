mod conversion;
mod equality;
mod format;
mod gamut;
mod grammar;
mod math;
mod named;
mod space;
mod string;

// conversion
pub(crate) use conversion::{convert, D65};

// equality
#[cfg(test)]
pub(crate) use equality::{assert_same_coordinates, same_coordinates};
pub use equality::{close_enough, to_eq_bits};
pub(crate) use equality::{normalize, to_eq_channels};

// format
pub(crate) use format::{format, format_number};

// gamut
pub(crate) use gamut::{clip, constrain, in_gamut, max_chroma};

// grammar
pub use grammar::{ChannelName, TextFormat};

// math
pub(crate) use math::{normalize_hue, round_to, FloatExt};

// space
pub use space::{ColorSpace, Key};

// string
pub(crate) use string::parse;
