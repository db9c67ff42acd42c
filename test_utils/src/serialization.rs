/// Checks that `$obj` survives a JSON round trip. The calling crate needs `serde_json`.
#[macro_export]
macro_rules! test_serialization {
    ($obj_type:ty, $obj: expr) => {
        let ser = serde_json::to_string(&$obj).unwrap();
        let deser = serde_json::from_str::<$obj_type>(&ser).unwrap();
        assert_eq!($obj, deser);
    };
}
