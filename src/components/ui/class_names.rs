use tw_merge::tw_merge;

/// One entry in an ordered class list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassFragment<'a> {
    /// Always included.
    Always(&'a str),
    /// Included only when the guard holds.
    When(&'a str, bool),
    /// Caller-supplied override, usually last so it takes precedence.
    Extra(Option<&'a str>),
}

impl<'a> ClassFragment<'a> {
    pub fn when(class: &'a str, guard: bool) -> Self {
        Self::When(class, guard)
    }

    /// Empty strings count as absent so `#[prop(optional)] class: String`
    /// can be passed straight through.
    pub fn extra(class: &'a str) -> Self {
        if class.trim().is_empty() {
            Self::Extra(None)
        } else {
            Self::Extra(Some(class))
        }
    }

    fn resolve(&self) -> Option<&'a str> {
        let class = match *self {
            Self::Always(class) => Some(class),
            Self::When(class, guard) => guard.then_some(class),
            Self::Extra(class) => class,
        }?;
        let class = class.trim();
        (!class.is_empty()).then_some(class)
    }
}

/// Joins the included fragments with single spaces, left to right.
/// Runs of whitespace inside a fragment collapse to one space.
pub fn compose_classes(fragments: &[ClassFragment<'_>]) -> String {
    fragments
        .iter()
        .filter_map(ClassFragment::resolve)
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Like [`compose_classes`], then lets later Tailwind utilities replace
/// earlier conflicting ones (`px-3 ... px-6` keeps `px-6`).
pub fn merge_classes(fragments: &[ClassFragment<'_>]) -> String {
    let joined = compose_classes(fragments);
    tw_merge!(joined)
}
