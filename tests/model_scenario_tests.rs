use indoc::indoc;
use resxgen::{Error, ErrorKind, InMemoryFile, ResourceModel, generate};

const SINGLE: &str = r#"<root><data name="Single"><value>Single Value</value></data></root>"#;

#[test]
fn test_empty_root_has_no_accessors() {
    let model = ResourceModel::new("/my/resources.resx", Some("<root></root>")).unwrap();
    assert_eq!(model.class_name(), "resources");
    assert!(model.entries().is_empty());

    let text = model.render();
    assert!(text.contains("pub struct resources {"));
    assert!(!text.contains("Self::get_string(\""));
}

#[test]
fn test_only_final_extension_is_stripped() {
    let model = ResourceModel::new("/my/resources.en.resx", None).unwrap();
    assert_eq!(model.class_name(), "resources.en");
}

#[test]
fn test_single_entry_renders_one_accessor() {
    let model = ResourceModel::new("/my/resources.resx", Some(SINGLE)).unwrap();
    let text = model.render();

    assert_eq!(text.matches("pub fn Single() -> String").count(), 1);
    assert!(text.contains("/// Looks up a localized string similar to: Single Value"));
    assert!(text.contains("Self::get_string(\"Single\")"));
    assert!(!text.contains("\"Single Value\""));
}

#[test]
fn test_missing_name_attribute_fails() {
    let err = ResourceModel::new(
        "/my/resources.resx",
        Some(r#"<root><data><value>x</value></data></root>"#),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingNameAttribute);
}

#[test]
fn test_empty_name_fails() {
    let err = ResourceModel::new(
        "/my/resources.resx",
        Some(r#"<root><data name=""><value>x</value></data></root>"#),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyResourceName);
}

#[test]
fn test_empty_path_fails_with_path_in_message() {
    let err = ResourceModel::new("", Some(SINGLE)).unwrap_err();
    assert!(matches!(err, Error::InvalidPath(ref p) if p.is_empty()));
    assert!(err.to_string().contains("``"));
}

#[test]
fn test_malformed_content_is_distinct_from_absent_content() {
    assert!(ResourceModel::new("/my/resources.resx", None).is_ok());
    let err = ResourceModel::new("/my/resources.resx", Some("<root><data>")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedDocument);
}

#[test]
fn test_full_render_layout() {
    let model = ResourceModel::new("/my/Strings.resx", Some(SINGLE))
        .unwrap()
        .with_namespace("app");
    let expected_tail = indoc! {r#"
        #[allow(non_snake_case)]
        pub mod app {
            /// A strongly-typed resource type, for looking up localized strings.
            #[rustfmt::skip]
            #[allow(dead_code, non_camel_case_types, clippy::all)]
            pub struct Strings {
                _private: (),
            }

            #[rustfmt::skip]
            #[allow(dead_code, non_snake_case, clippy::all)]
            impl Strings {
                /// Private constructor; the type is only used through its associated functions.
                #[allow(dead_code)]
                fn new() -> Self {
                    Self { _private: () }
                }

                /// Returns the cached resource manager used by this type.
                pub fn resource_manager() -> &'static ::resxgen::runtime::ResourceManager {
                    static RESOURCE_MANAGER: ::std::sync::OnceLock<::resxgen::runtime::ResourceManager> = ::std::sync::OnceLock::new();
                    RESOURCE_MANAGER.get_or_init(|| ::resxgen::runtime::ResourceManager::new("app.Strings", module_path!()))
                }

                fn culture_override() -> &'static ::std::sync::RwLock<Option<::resxgen::runtime::Culture>> {
                    static CULTURE: ::std::sync::RwLock<Option<::resxgen::runtime::Culture>> = ::std::sync::RwLock::new(None);
                    &CULTURE
                }

                /// Returns the culture override used for every lookup made through this type.
                /// `None` means the ambient default resources are used.
                pub fn culture() -> Option<::resxgen::runtime::Culture> {
                    Self::culture_override().read().unwrap_or_else(|e| e.into_inner()).clone()
                }

                /// Sets or clears the culture override.
                pub fn set_culture(culture: Option<::resxgen::runtime::Culture>) {
                    *Self::culture_override().write().unwrap_or_else(|e| e.into_inner()) = culture;
                }

                /// Looks up a localized string similar to: Single Value
                pub fn Single() -> String {
                    Self::get_string("Single")
                }

                /// Returns the resource string for `key`, or `key` itself when no resource matches.
                fn get_string(key: &str) -> String {
                    Self::resource_manager()
                        .get_string(key, Self::culture().as_ref())
                        .unwrap_or_else(|| key.to_owned())
                }
            }
        }
    "#};

    let text = model.render();
    assert!(text.starts_with("// @generated by resxgen "));
    assert!(
        text.ends_with(expected_tail),
        "unexpected render:\n{text}"
    );
}

#[test]
fn test_generate_matches_model_render() {
    let files = vec![InMemoryFile::new("/my/Strings.resx", Some(SINGLE))];
    let sources = generate(&files, Some("app")).unwrap();

    let model = ResourceModel::new("/my/Strings.resx", Some(SINGLE))
        .unwrap()
        .with_namespace("app");
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].key, "app.Strings");
    assert_eq!(sources[0].text, model.render());
}
