use crate::{
    access::{ScalarSource, ScalarTarget, TypedValue},
    error::{AccessError, AccessResult},
    types::Date,
    value::{ScalarKind, Value},
};
use std::thread;

// ---- fixtures ----------------------------------------------------------

/// A producer that wires up nothing at all.
struct OpaqueProbe;

impl ScalarSource for OpaqueProbe {}

/// A row-column producer that only wires up integer and text reads.
struct IntColumn(i64);

impl ScalarSource for IntColumn {
    fn source_label(&self) -> &'static str {
        "int column"
    }

    fn read_int(&self) -> AccessResult<i64> {
        Ok(self.0)
    }

    fn read_text(&self) -> AccessResult<String> {
        Ok(self.0.to_string())
    }
}

type ReadProbe = Box<dyn Fn(&dyn ScalarSource) -> AccessResult<()>>;

/// One unit-mapped read closure per registry entry.
fn read_probes() -> Vec<(ScalarKind, ReadProbe)> {
    macro_rules! collect_probes {
        ( @entries $( ($scalar:ident, $native:ty, $read_fn:ident, $family:ident, is_numeric = $is_numeric:expr) ),* $(,)? ) => {
            vec![
                $(
                    (
                        ScalarKind::$scalar,
                        Box::new(|source: &dyn ScalarSource| source.$read_fn().map(|_| ()))
                            as ReadProbe,
                    ),
                )*
            ]
        };
    }

    scalar_registry!(collect_probes)
}

// ---- fallback ----------------------------------------------------------

#[test]
fn every_unwired_read_fails_with_the_shared_fallback() {
    let probe = OpaqueProbe;

    for (kind, read) in read_probes() {
        let err = read(&probe).expect_err("unwired read must fail");
        assert_eq!(err, AccessError::unsupported("opaque", kind));
        assert!(err.is_defect());
    }
}

#[test]
fn fallback_is_deterministic_and_order_independent() {
    let probe = OpaqueProbe;
    let probes = read_probes();

    // forward, backward, and repeated: identical failures every time
    let forward: Vec<_> = probes.iter().map(|(_, read)| read(&probe)).collect();
    let backward: Vec<_> = probes.iter().rev().map(|(_, read)| read(&probe)).collect();

    for ((first, second), (kind, read)) in
        forward.iter().zip(backward.iter().rev()).zip(&probes)
    {
        assert_eq!(first, second);
        assert_eq!(read(&probe), read(&probe), "repeat read for {kind}");
    }
}

#[test]
fn default_source_is_not_null() {
    assert!(!OpaqueProbe.is_null());
}

// ---- partial producer --------------------------------------------------

#[test]
fn partial_producer_serves_wired_kinds_and_rejects_the_rest() {
    let column = TypedValue::new(IntColumn(42));

    assert_eq!(column.get::<i64>().unwrap(), 42);
    assert_eq!(column.get::<String>().unwrap(), "42");

    let err = column.get::<f64>().expect_err("float read is not wired");
    assert_eq!(err, AccessError::unsupported("int column", ScalarKind::Float64));
    assert!(err.is_defect());

    // unrelated to wired reads before or after
    assert_eq!(column.get::<i64>().unwrap(), 42);
    assert_eq!(column.get::<f64>().expect_err("still not wired"), err);
}

#[test]
fn wired_reads_are_idempotent() {
    let column = TypedValue::new(IntColumn(-3));

    let first: i64 = column.get().unwrap();
    let second: i64 = column.get().unwrap();
    assert_eq!(first, second);

    let first: String = column.get().unwrap();
    let second: String = column.get().unwrap();
    assert_eq!(first, second);
}

// ---- target dispatch ---------------------------------------------------

#[test]
fn target_kinds_match_the_registry() {
    assert_eq!(<bool as ScalarTarget>::KIND, ScalarKind::Bool);
    assert_eq!(<i64 as ScalarTarget>::KIND, ScalarKind::Int);
    assert_eq!(<String as ScalarTarget>::KIND, ScalarKind::Text);
    assert_eq!(<Vec<u8> as ScalarTarget>::KIND, ScalarKind::Blob);
    assert_eq!(<f64 as ScalarTarget>::KIND, ScalarKind::Float64);
}

#[test]
fn unsupported_errors_name_the_requested_kind() {
    let probe = OpaqueProbe;

    for (kind, read) in read_probes() {
        let err = read(&probe).expect_err("unwired read must fail");
        assert_eq!(err.requested(), kind);
    }
}

// ---- erased holder -----------------------------------------------------

#[test]
fn typed_value_wraps_the_reference_producer() {
    let value = TypedValue::from(Value::Int(7));

    assert_eq!(value.get::<i64>().unwrap(), 7);
    assert_eq!(value.get::<String>().unwrap(), "7");
    assert!(!value.is_null());
    assert_eq!(value.source_label(), "Int");
}

#[test]
fn null_reads_are_data_errors_not_defects() {
    let value = TypedValue::from(Value::Null);

    assert!(value.is_null());
    let err = value.get::<i64>().expect_err("null has no int representation");
    assert_eq!(
        err,
        AccessError::NullValue {
            requested: ScalarKind::Int
        }
    );
    assert!(!err.is_defect());
}

#[test]
fn debug_carries_the_source_label() {
    let value = TypedValue::from(Value::Bool(true));
    assert_eq!(format!("{value:?}"), "TypedValue(\"Bool\")");
}

// ---- concurrency -------------------------------------------------------

#[test]
fn concurrent_reads_match_sequential_reads() {
    let shared = TypedValue::from(Value::Int(123_456));

    let sequential_int = shared.get::<i64>().unwrap();
    let sequential_text = shared.get::<String>().unwrap();
    let sequential_err = shared.get::<Date>().expect_err("no temporal read");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let value = shared.clone();
            thread::spawn(move || {
                let int = value.get::<i64>().unwrap();
                let text = value.get::<String>().unwrap();
                let err = value.get::<Date>().expect_err("no temporal read");
                (int, text, err)
            })
        })
        .collect();

    for handle in handles {
        let (int, text, err) = handle.join().unwrap();
        assert_eq!(int, sequential_int);
        assert_eq!(text, sequential_text);
        assert_eq!(err, sequential_err);
    }
}

