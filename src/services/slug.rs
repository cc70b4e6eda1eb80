use slug::slugify;

/// Stand-in for a literal hyphen while a segment goes through `slugify`.
/// Being alphanumeric, it keeps whatever separator sits next to the hyphen.
const GLUE: char = '0';

/// Derives a slug from `source`, keeping every literal `-` as `--`.
///
/// Hyphens the slugifier inserts for spaces and punctuation stay single, so
/// `"co-working space"` becomes `"co--working-space"`.
pub fn generate_slug(source: &str) -> String {
    let segments: Vec<&str> = source.split('-').collect();
    if segments.len() == 1 {
        return slugify_segment(source);
    }

    let last = segments.len() - 1;
    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| glued_segment(segment, i > 0, i < last))
        .collect::<Vec<_>>()
        .join("--")
}

/// Plain slugify: lowercase ASCII, runs of anything else collapsed to `-`.
pub fn slugify_segment(source: &str) -> String {
    slugify(source)
}

fn glued_segment(segment: &str, after_hyphen: bool, before_hyphen: bool) -> String {
    let mut source = String::with_capacity(segment.len() + 2);
    if after_hyphen {
        source.push(GLUE);
    }
    source.push_str(segment);
    if before_hyphen {
        source.push(GLUE);
    }

    let slug = slugify_segment(&source);
    let mut slug = slug.as_str();
    if after_hyphen {
        slug = slug.strip_prefix(GLUE).unwrap_or(slug);
    }
    if before_hyphen {
        slug = slug.strip_suffix(GLUE).unwrap_or(slug);
    }
    slug.to_string()
}

/// Whether `slug` could have come out of [`generate_slug`]: non-empty and
/// made only of lowercase ASCII letters, digits and hyphens.
pub fn validate_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}
