/// One row of the error table: a code and the text that describes it.
///
/// Entries are defined once, as constants, and never change at runtime.
/// The `name` is the symbolic constant name and exists for listings and
/// debugging only; equality and hashing look at `code` alone.
///
/// # Naming conventions
///
/// | Prefix        | Group                          | Example                      |
/// |---------------|--------------------------------|------------------------------|
/// | `ERR_COMM_`   | Communication layer            | `ERR_COMM_SEND`              |
/// | `ERR_CTLD_`   | Controller / scheduler         | `ERR_CTLD_INVALID_JOB_ID`    |
/// | `ERR_ELAN_`   | Interconnect library           | `ERR_ELAN_BAD_SIGNAL`        |
/// | `ERR_NODE_`   | Node daemon                    | `ERR_NODE_FORK_FAILED`       |
/// | `ERR_SCRIPT_` | User batch script              | `ERR_SCRIPT_CHDIR_FAILED`    |
/// | `ERR_SOCK_`   | Socket framing                 | `ERR_SOCK_TIMEOUT`           |
/// | `ERR_AUTH_`   | Authentication                 | `ERR_AUTH_CRED_INVALID`      |
#[derive(Clone, Copy)]
pub struct ErrorEntry {
    pub code: i32,
    pub name: &'static str,
    pub message: &'static str,
}

impl ErrorEntry {
    /// Construct a new entry.
    ///
    /// ```
    /// use errspace::ErrorEntry;
    /// const BAD_JOB: ErrorEntry = ErrorEntry::new(100_001, "ERR_MY_BAD_JOB", "Bad job");
    /// ```
    pub const fn new(code: i32, name: &'static str, message: &'static str) -> Self {
        Self { code, name, message }
    }
}

impl PartialEq for ErrorEntry {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for ErrorEntry {}

impl core::hash::Hash for ErrorEntry {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl core::fmt::Debug for ErrorEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}({}): {:?}", self.name, self.code, self.message)
    }
}

impl core::fmt::Display for ErrorEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.message)
    }
}
