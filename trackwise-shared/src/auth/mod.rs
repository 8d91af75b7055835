/// Credential handling
///
/// # Modules
///
/// - [`password`]: Pluggable password storage (plaintext or Argon2id)
///
/// Login only answers "do these credentials match". No session or token is
/// issued, so no other endpoint depends on this module.

pub mod password;
