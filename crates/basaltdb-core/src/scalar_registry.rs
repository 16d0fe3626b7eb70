///
/// Scalar Registry
///
/// Single source of truth for the supported scalar set shared across the
/// core. Every surface that enumerates scalars (the producer read trait, the
/// target-type impls, kind classification, test grids) expands this registry
/// with a callback macro instead of repeating the list.
///
/// Entry shape:
/// (variant ident, native Rust type, producer read method, family ident,
/// is_numeric flag)
///

// NOTE: Temporal scalars are non-numeric on purpose. They convert to their
// canonical integer representation through the producer surface, but must
// not participate in numeric classification.
macro_rules! scalar_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (
                Blob,
                Vec<u8>,
                read_blob,
                Blob,
                is_numeric = false
            ),
            (
                Bool,
                bool,
                read_bool,
                Bool,
                is_numeric = false
            ),
            (
                Date,
                Date,
                read_date,
                Temporal,
                is_numeric = false
            ),
            (
                Decimal,
                Decimal,
                read_decimal,
                Numeric,
                is_numeric = true
            ),
            (
                Duration,
                Duration,
                read_duration,
                Temporal,
                is_numeric = false
            ),
            (
                Float32,
                f32,
                read_float32,
                Numeric,
                is_numeric = true
            ),
            (
                Float64,
                f64,
                read_float64,
                Numeric,
                is_numeric = true
            ),
            (
                Int,
                i64,
                read_int,
                Numeric,
                is_numeric = true
            ),
            (
                Int128,
                i128,
                read_int128,
                Numeric,
                is_numeric = true
            ),
            (
                Text,
                String,
                read_text,
                Textual,
                is_numeric = false
            ),
            (
                Timestamp,
                Timestamp,
                read_timestamp,
                Temporal,
                is_numeric = false
            ),
            (
                Uint,
                u64,
                read_uint,
                Numeric,
                is_numeric = true
            ),
            (
                Uint128,
                u128,
                read_uint128,
                Numeric,
                is_numeric = true
            ),
        }
    };
}

macro_rules! scalar_registry {
    ($macro:ident) => {
        scalar_registry_entries!{$macro}
    };
    ($macro:ident, $($args:tt)+) => {
        scalar_registry_entries!($macro, @args $($args)+)
    };
}
