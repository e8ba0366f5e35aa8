#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "nightly", feature(allocator_api))]

#[cfg(feature = "alloc")]
extern crate alloc;

macro_rules! feature_switch {
    ( ($feature:literal => $with:path | $without:path) ($($args:tt)*)) => {
        #[cfg(feature = $feature)]
        $with!($($args)*);

        #[cfg(not(feature = $feature))]
        $without!($($args)*);
    };
}

#[allow(unused)]
macro_rules! with_default {
    ($(#[$meta:meta])* $v:vis struct $name:ident<$($lt:lifetime,)* $($generic:ident $(: $bound:path $(: $bounds:path )*)? $(= +$default:ty)? $(= $default_type:ty)?),+> { $($(#[$fmeta:meta])*  $fvis:vis $fname:ident: $ftype:ty),* $(,)? }) => {
        $(#[$meta])*
        $v struct $name<$($lt,)* $($generic $(: $bound $(+ $bounds)*)? $(= $default)? $(= $default_type)?)+> {
            $($(#[$fmeta])* $fvis $fname: $ftype,)*
        }
    };
}

#[allow(unused)]
macro_rules! without_default {
    ($(#[$meta:meta])* $v:vis struct $name:ident<$($lt:lifetime,)* $($generic:ident $(: $bound:path $(: $bounds:path )*)? $(= +$default:ty)? $(= $default_type:ty)?),+> { $($(#[$fmeta:meta])* $fvis:vis $fname:ident: $ftype:ty),* $(,)? }) => {
        $(#[$meta])*
        $v struct $name<$($lt,)* $($generic $(: $bound $(+ $bounds)*)? $(= $default_type)?)+> {
            $($(#[$fmeta])* $fvis $fname: $ftype,)*
        }
    };
}

macro_rules! switch_alloc_default {
    ($($args:tt)*) => {
        feature_switch!{("alloc" => with_default | without_default) ($($args)*)}
    };
}

mod align;
mod chunk;
mod fmt;
mod oom;
mod stack;

#[cfg(test)]
mod tests;

pub use self::{
    fmt::StackWriter,
    oom::set_alloc_failed_handler,
    stack::ObjectStack,
};

#[cfg(feature = "std")]
pub use self::oom::set_alloc_failed_exit_code;

#[cold]
pub(crate) fn cold() {}
