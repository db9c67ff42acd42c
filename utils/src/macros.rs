/// Return `$error` if `$left` not equals `$right`
#[macro_export]
macro_rules! expect_equality {
    ($left: expr, $right: expr, $error: expr) => {
        if $left != $right {
            return Err($error($left, $right));
        }
    };
}

/// Return `$error` with the offending value if `$value` is negative
#[macro_export]
macro_rules! expect_non_negative {
    ($value: expr, $error: expr) => {
        if $value < 0 {
            return Err($error($value));
        }
    };
}
