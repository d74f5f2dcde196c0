/// Declare a group of error codes and its table slice in one place.
///
/// Each line produces a `pub const NAME: i32` and a row in the named
/// `pub const` table slice, in declaration order, so the code, its name
/// and its message cannot drift apart.
///
/// ```
/// mod my_codes {
///     errspace::error_codes! {
///         table ENTRIES;
///
///         /// The widget was not found.
///         ERR_APP_NO_WIDGET = 100_000 => "No such widget",
///         ERR_APP_WIDGET_BUSY = 100_001 => "Widget is busy",
///     }
/// }
///
/// assert_eq!(my_codes::ERR_APP_NO_WIDGET, 100_000);
/// assert_eq!(my_codes::ENTRIES.len(), 2);
/// assert_eq!(my_codes::ENTRIES[1].message, "Widget is busy");
/// ```
#[macro_export]
macro_rules! error_codes {
    (table $table:ident; $( $(#[$meta:meta])* $name:ident = $code:expr => $msg:expr ),* $(,)?) => {
        $(
            $(#[$meta])*
            pub const $name: i32 = $code;
        )*

        /// Every entry of this group, in declaration order.
        pub const $table: &[$crate::ErrorEntry] = &[
            $( $crate::ErrorEntry::new($name, stringify!($name), $msg), )*
        ];
    };
}

/// Set the current error and return `Err(Code)` from the enclosing function.
///
/// The enclosing function must return `Result<_, E>` where `E: From<Code>`.
///
/// ```
/// use errspace::{get_error, set_error_ret, Code};
/// use errspace::codes::ERR_CTLD_INVALID_JOB_ID;
///
/// fn find_job(id: u32) -> Result<u32, Code> {
///     if id == 0 {
///         set_error_ret!(ERR_CTLD_INVALID_JOB_ID);
///     }
///     Ok(id)
/// }
///
/// assert!(find_job(0).is_err());
/// assert_eq!(get_error(), ERR_CTLD_INVALID_JOB_ID);
/// ```
#[macro_export]
macro_rules! set_error_ret {
    ($code:expr) => {{
        let code: i32 = $code;
        $crate::set_error(code);
        return ::core::result::Result::Err(::core::convert::From::from($crate::Code(code)));
    }};
}
