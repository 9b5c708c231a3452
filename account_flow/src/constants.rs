//! Storage keys and flow defaults.

/// Key under which the collection of registered users is stored.
pub const USER_STORAGE: &str = "users";

/// Key under which the currently logged-in user is stored.
pub const LOGGEDIN_USER: &str = "loggedInUser";

/// Where a successful login sends the user.
pub const HOME_PATH: &str = "/";

/// Id given to the first user registered in an empty store.
pub const FIRST_USER_ID: u64 = 1;

/// Argon2 time cost. Deliberately low; the hash is illustrative only.
pub const DEFAULT_HASH_COST: u32 = 1;

/// Argon2 memory cost in KiB.
pub const DEFAULT_HASH_MEMORY_KIB: u32 = 8 * 1024;

/// Minimum password length accepted by the password policy.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Number of digits in a date of birth (`YYMMDD`).
pub const DATE_OF_BIRTH_LEN: usize = 6;
