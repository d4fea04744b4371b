#[macro_export]
macro_rules! log_err {
    // Usage: log_err!("loading blog posts", err);
    ($context:expr, $err:expr) => {{
        ::tracing::error!(
            location = concat!(file!(), ":", line!()),
            error = %$err,
            "{} failed",
            $context,
        );
    }};
}
