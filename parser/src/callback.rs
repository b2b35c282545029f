//! Element hooks for the data set reader.
//!
//! A [`CallbackRegistry`] holds at most one registration:
//! an [element callback](ElementCallback) paired with its own typed options.
//! Every raw element framed by a [`DataSetReader`]
//! goes through the registry before it is yielded,
//! which lets consumers fix up non-conforming values
//! before any value decoding takes place.
//!
//! The registry is a plain value.
//! It is handed to the reader through its [options],
//! so that each decode pass carries its own hook.
//!
//! ```
//! # use dicom_core::{RawElement, Tag, VR};
//! # use dicom_parser::callback::CallbackRegistry;
//! let mut registry = CallbackRegistry::new();
//! registry.install(
//!     |raw: RawElement, suffix: &Vec<u8>| {
//!         let mut value = raw.value().to_vec();
//!         value.extend_from_slice(suffix);
//!         raw.with_value(value)
//!     },
//!     b"  ".to_vec(),
//! );
//!
//! let raw = RawElement::new(Tag(0x0010, 0x0010), Some(VR::PN), &b"Doe^John"[..]);
//! assert_eq!(registry.invoke(raw).value(), b"Doe^John  ");
//! ```
//!
//! [`DataSetReader`]: crate::dataset::DataSetReader
//! [options]: crate::dataset::DataSetReaderOptions

use dicom_core::RawElement;
use std::fmt;
use std::sync::Arc;

/// A function applied to each raw element framed by the reader,
/// parameterized by options of type `O`.
///
/// Callbacks must always produce an element.
/// Elements which the callback is not interested in
/// should be returned unchanged.
pub trait ElementCallback<O> {
    /// Process one raw element.
    fn call(&self, raw: RawElement, options: &O) -> RawElement;
}

impl<O, F> ElementCallback<O> for F
where
    F: Fn(RawElement, &O) -> RawElement,
{
    #[inline]
    fn call(&self, raw: RawElement, options: &O) -> RawElement {
        self(raw, options)
    }
}

type Hook = dyn Fn(RawElement) -> RawElement + Send + Sync;

/// A callback bound to its options.
struct Registration {
    hook: Box<Hook>,
    /// type name of the callback, for diagnostics
    callback_name: &'static str,
}

/// A holder of the element callback used by a data set reader.
///
/// Cloning a registry is cheap,
/// and the clone shares the current registration.
/// Installing or clearing a callback on one registry
/// never affects the clones made before,
/// including the one owned by a reader which is already running.
#[derive(Clone, Default)]
pub struct CallbackRegistry {
    registration: Option<Arc<Registration>>,
}

impl fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.registration {
            Some(registration) => f
                .debug_tuple("CallbackRegistry")
                .field(&registration.callback_name)
                .finish(),
            None => f.write_str("CallbackRegistry(<empty>)"),
        }
    }
}

impl CallbackRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the given callback and options installed.
    pub fn with_callback<C, O>(callback: C, options: O) -> Self
    where
        C: ElementCallback<O> + Send + Sync + 'static,
        O: Send + Sync + 'static,
    {
        let mut registry = Self::new();
        registry.install(callback, options);
        registry
    }

    /// Install a callback together with the options it will be called with,
    /// replacing any previous registration.
    ///
    /// The callback and its options are stored as a single registration,
    /// so the callback is never called with the options of another one.
    pub fn install<C, O>(&mut self, callback: C, options: O)
    where
        C: ElementCallback<O> + Send + Sync + 'static,
        O: Send + Sync + 'static,
    {
        let callback_name = std::any::type_name::<C>();
        tracing::debug!("Installing element callback {}", callback_name);
        self.registration = Some(Arc::new(Registration {
            hook: Box::new(move |raw| callback.call(raw, &options)),
            callback_name,
        }));
    }

    /// Remove the installed callback, if any.
    pub fn clear(&mut self) {
        self.registration = None;
    }

    /// Whether a callback is currently installed.
    pub fn is_installed(&self) -> bool {
        self.registration.is_some()
    }

    /// Pass a raw element through the installed callback.
    ///
    /// Returns the element unchanged if no callback is installed.
    pub fn invoke(&self, raw: RawElement) -> RawElement {
        match &self.registration {
            Some(registration) => (registration.hook)(raw),
            None => raw,
        }
    }
}
