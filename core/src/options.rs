//! Options builders shared by every service module.
//!
//! # Design
//! Each API operation takes one immutable options value. The value is only
//! obtainable from its builder's `build()`, which checks that every required
//! field is present and non-empty and reports the first missing one by name.
//! `new_builder()` goes the other way, so a follow-up call can change one
//! field (typically the page cursor) and keep the rest.
//!
//! All of the per-operation types are stamped out by [`request_options!`];
//! the macro keeps the hundred-odd option types uniform.
//!
//! Field kinds:
//! - `required`: `T` in the options value, `Option<T>` in the builder.
//! - `optional`: `Option<T>` in both. Getters hand out the borrowed form
//!   chosen by [`FieldRef`], so a `String` field reads as `Option<&str>`.
//! - `lists`: `Vec<T>` in both, with a replacing plural setter and an
//!   appending `add_*` method.
//! - `required_lists`: like `lists`, but `build()` rejects an empty list.
//!
//! A trailing `check { path }` names a function run on the finished value
//! for rules that span several fields.

use crate::error::ApiError;

/// Values that can be checked for presence at `build()` time.
pub(crate) trait Present {
    fn is_present(&self) -> bool {
        true
    }
}

impl Present for String {
    fn is_present(&self) -> bool {
        !self.trim().is_empty()
    }
}

impl<T> Present for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Present for serde_json::Value {
    fn is_present(&self) -> bool {
        !self.is_null()
    }
}

impl Present for bool {}
impl Present for i64 {}
impl Present for f64 {}
impl Present for chrono::NaiveDateTime {}
impl Present for chrono::NaiveDate {}

/// Borrowed form of an optional field as returned by its getter.
///
/// Strings come back as `&str` and byte buffers as `&[u8]`; `Copy` scalars
/// are returned by value and everything else by reference.
pub trait FieldRef {
    type Ref<'a>: Copy
    where
        Self: 'a;

    fn field_ref(&self) -> Self::Ref<'_>;
}

impl FieldRef for String {
    type Ref<'a> = &'a str;

    fn field_ref(&self) -> &str {
        self
    }
}

impl FieldRef for Vec<u8> {
    type Ref<'a> = &'a [u8];

    fn field_ref(&self) -> &[u8] {
        self
    }
}

macro_rules! by_value {
    ($($ty:ty),* $(,)?) => {$(
        impl FieldRef for $ty {
            type Ref<'a> = $ty;

            fn field_ref(&self) -> $ty {
                *self
            }
        }
    )*};
}

macro_rules! by_ref {
    ($($ty:ty),* $(,)?) => {$(
        impl FieldRef for $ty {
            type Ref<'a> = &'a $ty;

            fn field_ref(&self) -> &$ty {
                self
            }
        }
    )*};
}

by_value!(bool, i64, f64, chrono::NaiveDate, chrono::NaiveDateTime);

by_ref!(
    serde_json::Map<String, serde_json::Value>,
    crate::assistant::model::Context,
    crate::assistant::model::DialogNodeNextStep,
    crate::assistant::model::MessageInput,
    crate::assistant::model::OutputData,
    crate::assistant::model::WorkspaceSystemSettings,
);

pub(crate) fn require<T: Present>(field: &'static str, value: Option<T>) -> Result<T, ApiError> {
    match value {
        Some(value) if value.is_present() => Ok(value),
        _ => Err(ApiError::MissingField { field }),
    }
}

pub(crate) fn require_items<T>(field: &'static str, items: Vec<T>) -> Result<Vec<T>, ApiError> {
    if items.is_empty() {
        return Err(ApiError::MissingField { field });
    }
    Ok(items)
}

/// Declare an options type and its builder.
///
/// ```ignore
/// request_options! {
///     /// Options for creating a counterexample.
///     pub struct CreateCounterexampleOptions => CreateCounterexampleOptionsBuilder {
///         required { workspace_id: String, text: String }
///         optional {}
///         lists {}
///     }
/// }
/// ```
macro_rules! request_options {
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $builder:ident {
            required { $($(#[$rmeta:meta])* $req:ident: $req_ty:ty),* $(,)? }
            optional { $($(#[$ometa:meta])* $opt:ident: $opt_ty:ty),* $(,)? }
            lists { $($(#[$lmeta:meta])* $list:ident / $adder:ident: $item_ty:ty),* $(,)? }
            $(required_lists { $($(#[$qmeta:meta])* $rlist:ident / $radder:ident: $ritem_ty:ty),* $(,)? })?
            $(check { $check:path })?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            $($req: $req_ty,)*
            $($opt: Option<$opt_ty>,)*
            $($list: Vec<$item_ty>,)*
            $($($rlist: Vec<$ritem_ty>,)*)?
        }

        impl $name {
            /// Start a builder with the required fields already set.
            #[allow(unused_mut)]
            pub fn builder($($req: impl Into<$req_ty>),*) -> $builder {
                let mut builder = $builder::default();
                $(builder.$req = Some($req.into());)*
                builder
            }

            $(
                $(#[$rmeta])*
                pub fn $req(&self) -> &$req_ty {
                    &self.$req
                }
            )*

            $(
                $(#[$ometa])*
                pub fn $opt(&self) -> Option<<$opt_ty as $crate::options::FieldRef>::Ref<'_>> {
                    self.$opt.as_ref().map(|value| $crate::options::FieldRef::field_ref(value))
                }
            )*

            $(
                $(#[$lmeta])*
                pub fn $list(&self) -> &[$item_ty] {
                    &self.$list
                }
            )*

            $($(
                $(#[$qmeta])*
                pub fn $rlist(&self) -> &[$ritem_ty] {
                    &self.$rlist
                }
            )*)?

            /// Copy every field into a fresh builder.
            pub fn new_builder(&self) -> $builder {
                $builder {
                    $($req: Some(self.$req.clone()),)*
                    $($opt: self.$opt.clone(),)*
                    $($list: self.$list.clone(),)*
                    $($($rlist: self.$rlist.clone(),)*)?
                }
            }
        }

        #[doc = concat!("Builder for [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Default)]
        pub struct $builder {
            $($req: Option<$req_ty>,)*
            $($opt: Option<$opt_ty>,)*
            $($list: Vec<$item_ty>,)*
            $($($rlist: Vec<$ritem_ty>,)*)?
        }

        impl $builder {
            /// A builder with nothing set.
            pub fn new() -> Self {
                Self::default()
            }

            $(
                pub fn $req(mut self, $req: impl Into<$req_ty>) -> Self {
                    self.$req = Some($req.into());
                    self
                }
            )*

            $(
                pub fn $opt(mut self, $opt: impl Into<$opt_ty>) -> Self {
                    self.$opt = Some($opt.into());
                    self
                }
            )*

            $(
                /// Replace the whole list.
                pub fn $list(mut self, $list: impl IntoIterator<Item = $item_ty>) -> Self {
                    self.$list = $list.into_iter().collect();
                    self
                }

                /// Append one item.
                pub fn $adder(mut self, item: impl Into<$item_ty>) -> Self {
                    self.$list.push(item.into());
                    self
                }
            )*

            $($(
                /// Replace the whole list.
                pub fn $rlist(mut self, $rlist: impl IntoIterator<Item = $ritem_ty>) -> Self {
                    self.$rlist = $rlist.into_iter().collect();
                    self
                }

                /// Append one item.
                pub fn $radder(mut self, item: impl Into<$ritem_ty>) -> Self {
                    self.$rlist.push(item.into());
                    self
                }
            )*)?

            /// Validate required fields and freeze the options.
            pub fn build(self) -> Result<$name, $crate::error::ApiError> {
                let options = $name {
                    $($req: $crate::options::require(stringify!($req), self.$req)?,)*
                    $($opt: self.$opt,)*
                    $($list: self.$list,)*
                    $($($rlist: $crate::options::require_items(stringify!($rlist), self.$rlist)?,)*)?
                };
                $($check(&options)?;)?
                Ok(options)
            }
        }
    };
}

pub(crate) use request_options;
