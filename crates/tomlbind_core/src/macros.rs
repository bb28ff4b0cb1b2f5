/// Declare a bindable model struct.
///
/// Emits the struct unchanged plus a static [`crate::ModelSchema`] and the
/// [`crate::Model`] and [`crate::BindField`] impls a generated adapter needs.
/// A field written `name as "key": Type` reads `key` instead of the derived
/// snake_case key. The struct must implement [`Default`].
///
/// ```
/// tomlbind::bindable! {
///     #[derive(Debug, Default)]
///     pub struct Server {
///         pub port: u16,
///         pub bind_address as "bind-address": String,
///     }
/// }
///
/// let schema = <Server as tomlbind::Model>::schema();
/// assert_eq!(schema.keys().collect::<Vec<_>>(), ["port", "bind-address"]);
/// ```
#[macro_export]
macro_rules! bindable {
	(
		$(#[$meta:meta])*
		$vis:vis struct $name:ident {
			$(
				$(#[$fmeta:meta])*
				$fvis:vis $field:ident $(as $key:literal)? : $fty:ty
			),* $(,)?
		}
	) => {
		$(#[$meta])*
		$vis struct $name {
			$(
				$(#[$fmeta])*
				$fvis $field: $fty,
			)*
		}

		const _: () = {
			static FIELDS: &[$crate::FieldSchema] = &[
				$(
					$crate::FieldSchema::new(
						::core::stringify!($field),
						$crate::__field_key!($($key)?),
						<$fty as $crate::BindField>::REQUIRED,
					),
				)*
			];

			static SCHEMA: $crate::ModelSchema = $crate::ModelSchema {
				type_name: ::core::stringify!($name),
				fields: FIELDS,
			};

			impl $crate::Model for $name {
				fn schema() -> &'static $crate::ModelSchema {
					&SCHEMA
				}

				#[allow(unused_mut, unused_variables)]
				fn read_fields(&mut self, table: &$crate::Table, cx: &mut $crate::BindContext<'_>) {
					let mut fields = FIELDS.iter();
					$(
						if let ::core::option::Option::Some(field) = fields.next() {
							cx.read_field(table, field, &mut self.$field);
						}
					)*
				}

				#[allow(unused_variables)]
				fn register_fields(registry: &$crate::Registry) {
					$( <$fty as $crate::BindField>::register_graph(registry); )*
				}
			}

			impl $crate::BindField for $name {
				fn expected() -> ::std::string::String {
					::std::string::String::from("table")
				}

				fn read_value(value: &$crate::Value, cx: &mut $crate::BindContext<'_>) -> ::core::option::Option<Self> {
					cx.read_nested_value::<Self>(value)
				}

				fn read_table(table: &$crate::Table, cx: &mut $crate::BindContext<'_>) -> ::core::option::Option<Self> {
					cx.read_nested::<Self>(table)
				}

				fn register_graph(registry: &$crate::Registry) {
					registry.register_model::<Self>();
				}
			}
		};
	};
}

/// Declare an enumeration bindable from its variant names.
///
/// Only unit variants are accepted. Symbols match case-insensitively.
///
/// ```
/// tomlbind::bindable_enum! {
///     #[derive(Debug, Default, PartialEq)]
///     pub enum Strategy {
///         #[default]
///         Weighted,
///         Failover,
///     }
/// }
///
/// use tomlbind::BindEnum;
/// assert_eq!(Strategy::from_index(1), Some(Strategy::Failover));
/// assert_eq!(Strategy::Weighted.symbol(), "Weighted");
/// ```
#[macro_export]
macro_rules! bindable_enum {
	(
		$(#[$meta:meta])*
		$vis:vis enum $name:ident {
			$(
				$(#[$vmeta:meta])*
				$variant:ident
			),+ $(,)?
		}
	) => {
		$(#[$meta])*
		$vis enum $name {
			$(
				$(#[$vmeta])*
				$variant,
			)+
		}

		const _: () = {
			static SCHEMA: $crate::EnumSchema = $crate::EnumSchema {
				type_name: ::core::stringify!($name),
				symbols: &[$(::core::stringify!($variant)),+],
			};

			impl $crate::BindEnum for $name {
				fn schema() -> &'static $crate::EnumSchema {
					&SCHEMA
				}

				fn from_index(index: usize) -> ::core::option::Option<Self> {
					[$(Self::$variant),+].into_iter().nth(index)
				}

				fn symbol(&self) -> &'static str {
					match self {
						$(Self::$variant => ::core::stringify!($variant),)+
					}
				}
			}

			impl $crate::BindField for $name {
				fn expected() -> ::std::string::String {
					::std::string::String::from(::core::stringify!($name))
				}

				fn read_value(value: &$crate::Value, cx: &mut $crate::BindContext<'_>) -> ::core::option::Option<Self> {
					cx.read_enum::<Self>(value)
				}
			}
		};
	};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_key {
	() => {
		::core::option::Option::None
	};
	($key:literal) => {
		::core::option::Option::Some($key)
	};
}
