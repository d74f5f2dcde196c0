//! Authentication plugin codes (6000–6999).

error_codes! {
    table AUTH_ENTRIES;

    ERR_AUTH_CRED_INVALID = 6000 => "Invalid authentication credential",
    ERR_AUTH_FOPEN = 6001 => "Failed to open authentication public key",
    ERR_AUTH_NET = 6002 => "Failed to connect to authentication agent",
}
