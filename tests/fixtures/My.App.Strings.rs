// @generated by resxgen 0.1.0
// Do not edit it manually, as your changes will be overwritten.

#[allow(non_snake_case)]
pub mod My {
    #[allow(non_snake_case)]
    pub mod App {
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
                RESOURCE_MANAGER.get_or_init(|| ::resxgen::runtime::ResourceManager::new("My.App.Strings", module_path!()))
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

            /// Looks up a localized string similar to: Welcome
            ///
            /// Comment: Start screen heading
            pub fn Title() -> String {
                Self::get_string("Title")
            }

            /// Looks up a localized string similar to: Goodbye
            pub fn Farewell() -> String {
                Self::get_string("Farewell")
            }

            /// Returns the resource string for `key`, or `key` itself when no resource matches.
            fn get_string(key: &str) -> String {
                Self::resource_manager()
                    .get_string(key, Self::culture().as_ref())
                    .unwrap_or_else(|| key.to_owned())
            }
        }
    }
}
