#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

#[cfg(not(feature = "std"))]
mod std;

#[cfg(feature = "debug")]
macro_rules! debug {
    ($($arg:tt)+) => { log::debug!($($arg)+) };
}

#[cfg(not(feature = "debug"))]
macro_rules! debug {
    ($($arg:tt)+) => {};
}

#[cfg(test)]
static INIT: ::std::sync::Once = ::std::sync::Once::new();

#[cfg(test)]
macro_rules! logged_test {
    ($name:ident() $block:block) => {
        #[test]
        fn $name() {
            crate::INIT.call_once(|| {
                simple_logger::SimpleLogger::new().init().unwrap();
            });
            $block
        }
    };
}

mod matcher;
mod token;

use std::boxed::Box;
use std::collections::HashSet;
use std::fmt;
use std::string::String;
use std::vec::Vec;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Error {
    NoFullName,
    SameNames,
    NoCallback,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Error::NoFullName => "[argument] no full name provided",
            Error::SameNames => "[argument] names cannot be same",
            Error::NoCallback => "[argument] nil callback func",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Invoked with the values found for an argument.
pub type Callback<'a> = Box<dyn FnMut(Vec<String>) + 'a>;

#[derive(Default)]
pub struct Argument<'a> {
    // full name e.g "create-superuser", matched by --create-superuser
    pub full: &'a str,
    // alias e.g "csu", matched by -csu. An empty alias matches a bare - or --
    pub short: &'a str,
    pub callback: Option<Callback<'a>>,
}

impl<'a> fmt::Debug for Argument<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Argument")
            .field("full", &self.full)
            .field("short", &self.short)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

/// A validated argument, owned by a [`Registry`].
pub(crate) struct Definition<'a> {
    pub(crate) full: &'a str,
    pub(crate) short: &'a str,
    pub(crate) callback: Callback<'a>,
}

impl<'a> Definition<'a> {
    pub(crate) fn matches(&self, name: &str) -> bool {
        self.full == name || self.short == name
    }
}

pub trait IntoStr {
    fn into(&self) -> &str;
}

impl IntoStr for &str {
    fn into(&self) -> &str {
        self
    }
}

impl IntoStr for String {
    fn into(&self) -> &str {
        self.as_str()
    }
}

/// Registered arguments, matched in registration order.
///
/// ```
/// use argumentus::Registry;
///
/// let mut user = Vec::new();
/// let mut registry = Registry::new();
/// registry.add("username", "u", |values| user = values).unwrap();
/// registry.run(vec!["--username", "root", "-u", "ignored"]);
/// drop(registry);
/// assert_eq!(vec!["root".to_string()], user);
/// ```
#[derive(Default)]
pub struct Registry<'a> {
    args: Vec<Definition<'a>>,
}

impl<'a> fmt::Debug for Registry<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list()
            .entries(self.args.iter().map(|a| (a.full, a.short)))
            .finish()
    }
}

impl<'a> Registry<'a> {
    pub fn new() -> Self {
        Registry { args: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// registers `callback` to be run when `--full` or `-short` is found
    pub fn add<F: FnMut(Vec<String>) + 'a>(&mut self, full: &'a str, short: &'a str, callback: F) -> Result<(), Error> {
        self.insert(Argument {
            full,
            short,
            callback: Some(Box::new(callback)),
        })
    }

    /// Validates and stores `arg`. Checks run in a fixed order: the full name first, then
    /// whether both names are the same and finally the callback. Nothing is stored on error.
    pub fn insert(&mut self, arg: Argument<'a>) -> Result<(), Error> {
        if arg.full.is_empty() {
            debug!("rejecting argument without a full name");
            return Err(Error::NoFullName);
        }
        if arg.full == arg.short {
            debug!("rejecting argument {}, full and short names are the same", arg.full);
            return Err(Error::SameNames);
        }
        let callback = arg.callback.ok_or(Error::NoCallback)?;
        debug!("registering argument #{} --{} -{}", self.args.len() + 1, arg.full, arg.short);
        self.args.push(Definition {
            full: arg.full,
            short: arg.short,
            callback,
        });
        Ok(())
    }

    /// Scans `args` once and runs the callback of every matched argument.
    ///
    /// The first token is not special cased, strip the program path yourself if it may look like a flag.
    /// Each argument fires at most once per scan, later occurrences of its names are ignored.
    /// Calling back into the registry from a callback isn't possible, it's mutably borrowed for the whole scan.
    pub fn run<S: IntoStr, T: IntoIterator<Item = S>>(&mut self, args: T) {
        let owned: Vec<S> = args.into_iter().collect();
        let tokens: Vec<&str> = owned.iter().map(|a| IntoStr::into(a)).collect();
        debug!("scanning {} tokens against {} arguments", tokens.len(), self.args.len());
        matcher::match_args(&tokens, &mut self.args);
    }

    /// [`Registry::run`] over the arguments of the current process.
    #[cfg(feature = "std")]
    pub fn start(&mut self) {
        self.run(std::env::args())
    }
}

/// Registers several arguments at once, stopping at the first error.
///
/// ```
/// use argumentus::{args, Registry};
///
/// let mut registry = Registry::new();
/// let res = args!(&mut registry,
///     ("username", "u") => |_| {},
///     ("password", "p") => |_| {},
/// );
/// assert_eq!(Ok(()), res);
/// assert_eq!(2, registry.len());
/// ```
#[cfg(feature = "macros")]
#[macro_export]
macro_rules! args {
    ($registry:expr, $(($full:expr, $short:expr) => $callback:expr),+ $(,)?) => {{
        let registry: &mut $crate::Registry<'_> = $registry;
        let mut result: Result<(), $crate::Error> = Ok(());
        $(
            if result.is_ok() {
                result = registry.add($full, $short, $callback);
            }
        )+
        result
    }};
}
