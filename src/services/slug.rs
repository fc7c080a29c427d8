use lazy_static::lazy_static;
use regex::Regex;

use crate::error::AppError;

pub const MAX_SLUG_LEN: usize = 50;

lazy_static! {
    static ref SLUG_REGEX: Regex = Regex::new(r"^[-a-zA-Z0-9_]+$").unwrap();
    static ref NON_SLUG_CHARS: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

/// Reject anything that isn't a URL-safe short identifier.
pub fn validate_slug(slug: &str) -> Result<(), AppError> {
    if slug.len() > MAX_SLUG_LEN {
        return Err(AppError::Validation(format!(
            "slug must be at most {} characters",
            MAX_SLUG_LEN
        )));
    }
    if !SLUG_REGEX.is_match(slug) {
        return Err(AppError::Validation(format!(
            "slug {:?} may only contain letters, numbers, underscores or hyphens",
            slug
        )));
    }
    Ok(())
}

/// Derive a slug from a display name, e.g. "Laptops & Tablets" -> "laptops-tablets".
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let dashed = NON_SLUG_CHARS.replace_all(&lowered, "-");
    let trimmed = dashed.trim_matches('-');

    // Cut on a char boundary; the result is ASCII so bytes == chars
    let mut slug: String = trimmed.chars().take(MAX_SLUG_LEN).collect();
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Use the explicit slug if given, otherwise derive one from `name`.
pub fn resolve_slug(name: &str, slug: Option<&str>) -> Result<String, AppError> {
    let slug = match slug {
        Some(s) => s.trim().to_string(),
        None => slugify(name),
    };
    if slug.is_empty() {
        return Err(AppError::Validation(format!(
            "cannot derive a slug from {:?}",
            name
        )));
    }
    validate_slug(&slug)?;
    Ok(slug)
}
