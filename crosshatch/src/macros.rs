#[macro_export]
macro_rules! expect {
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(t) => t,
            Err(why) => {
                panic!("{}: {:?}", $msg, why);
            }
        }
    };
}

// Log macros with the crate target filled in

#[macro_export]
macro_rules! hatch_error {
    ($($arg:tt)+) => {
        $crate::log::error!(target: "crosshatch", $($arg)+)
    };
}

#[macro_export]
macro_rules! hatch_warn {
    ($($arg:tt)+) => {
        $crate::log::warn!(target: "crosshatch", $($arg)+)
    };
}

#[macro_export]
macro_rules! hatch_info {
    ($($arg:tt)+) => {
        $crate::log::info!(target: "crosshatch", $($arg)+)
    };
}

#[macro_export]
macro_rules! hatch_debug {
    ($($arg:tt)+) => {
        $crate::log::debug!(target: "crosshatch", $($arg)+)
    };
}

#[macro_export]
macro_rules! hatch_trace {
    ($($arg:tt)+) => {
        $crate::log::trace!(target: "crosshatch", $($arg)+)
    };
}
