use std::path::Path;

use url::Url;

use crate::error::Error;

/// Derive the output filename from the link's `id` query parameter.
///
/// The provider embeds the full filename, extension included, in `id`. An
/// override replaces the base name only; the extension always comes from the
/// link.
pub fn wallpaper_name(link: &Url, override_name: Option<&str>) -> Result<String, Error> {
    let mut ids = link
        .query_pairs()
        .filter(|(key, _)| key == "id")
        .map(|(_, value)| value.into_owned());

    let id = ids.next().ok_or_else(|| Error::MissingParameter {
        link: link.clone(),
    })?;

    let extra = ids.count();
    if extra > 0 {
        return Err(Error::AmbiguousParameter {
            link: link.clone(),
            count: extra + 1,
        });
    }

    // The id becomes a filename; an empty value or one smuggling path
    // separators cannot name a file in the output directory.
    if id.is_empty() || id.contains(['/', '\\']) {
        return Err(Error::MissingParameter {
            link: link.clone(),
        });
    }

    match override_name {
        None => Ok(id),
        Some(name) => match Path::new(&id).extension() {
            Some(ext) => Ok(format!("{name}.{}", ext.to_string_lossy())),
            None => Ok(name.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(query: &str) -> Url {
        Url::parse(&format!("https://www.bing.com/th?{query}")).unwrap()
    }

    #[test]
    fn uses_id_verbatim_without_override() {
        let name =
            wallpaper_name(&link("id=OTD_BuckinghamPalace_EN-GB1234567890.webp"), None).unwrap();

        assert_eq!("OTD_BuckinghamPalace_EN-GB1234567890.webp", name);
    }

    #[test]
    fn override_keeps_the_extension() {
        let name = wallpaper_name(
            &link("id=OTD_BuckinghamPalace_EN-GB1234567890.webp"),
            Some("myname"),
        )
        .unwrap();

        assert_eq!("myname.webp", name);
    }

    #[test]
    fn override_without_extension_in_id() {
        let name = wallpaper_name(&link("id=OTD_BuckinghamPalace"), Some("myname")).unwrap();

        assert_eq!("myname", name);
    }

    #[test]
    fn missing_id_is_rejected() {
        let err = wallpaper_name(&link("rf=Other.jpg"), None).unwrap_err();

        assert!(matches!(err, Error::MissingParameter { .. }));
    }

    #[test]
    fn duplicated_id_is_rejected() {
        let err = wallpaper_name(&link("id=First.jpg&id=Second.jpg"), None).unwrap_err();

        assert!(matches!(err, Error::AmbiguousParameter { count: 2, .. }));
    }

    #[test]
    fn empty_id_is_rejected() {
        let err = wallpaper_name(&link("id="), None).unwrap_err();

        assert!(matches!(err, Error::MissingParameter { .. }));
    }

    #[test]
    fn id_with_path_separators_is_rejected() {
        let err = wallpaper_name(&link("id=../../etc/passwd"), None).unwrap_err();

        assert!(matches!(err, Error::MissingParameter { .. }));
    }
}
