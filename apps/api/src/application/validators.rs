/// The only shape check applied to waitlist emails: non-blank and containing `@`.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && email.contains('@')
}

/// Bucket names and object paths handed to cloud storage.
///
/// Rejects empty segments and parent-directory hops so a caller cannot
/// address objects outside the bucket it named.
pub fn is_valid_object_path(path: &str) -> bool {
    !path.is_empty()
        && !path.starts_with('/')
        && path
            .split('/')
            .all(|segment| !segment.is_empty() && segment != "." && segment != "..")
}
