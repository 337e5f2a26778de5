/// The runtime value type.
///
/// Defines [`core::Value`], a scalar or a vector of scalars, together with
/// conversions and formatting.
pub mod core;
