//! Convenience macros for the formatted facade variants.
//!
//! `log_warn!(logger, "disk at {}%", 91)` expands to
//! `logger.warnf(format_args!("disk at {}%", 91))`. The plain variants need
//! no macro; they are called directly with a slice of values.

#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)*) => {
        $logger.tracef(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.infof(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_notice {
    ($logger:expr, $($arg:tt)*) => {
        $logger.noticef(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warnf(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.errorf(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_alert {
    ($logger:expr, $($arg:tt)*) => {
        $logger.alertf(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_emergency {
    ($logger:expr, $($arg:tt)*) => {
        $logger.emergencyf(format_args!($($arg)*))
    };
}
