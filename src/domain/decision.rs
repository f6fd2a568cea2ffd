//! Navigation decision produced by the engine.

/// The outcome of one engine invocation.
///
/// A decision says which directory the listing should show and which filter,
/// if any, applies inside it. It is created fresh for every call and carries
/// no reference to the inputs it was computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationDecision {
    /// Directory to display. Empty string is the namespace root.
    pub target_directory: String,

    /// Substring filter to apply within `target_directory`.
    ///
    /// `None` means the full listing is shown.
    pub residual_filter: Option<String>,

    /// Whether `target_directory` differs from the directory being shown.
    ///
    /// A directory change calls for a route transition; otherwise only the
    /// filter query parameter is updated in place.
    pub is_directory_change: bool,
}

impl NavigationDecision {
    /// Builds a decision, normalizing an empty residual to `None`.
    #[must_use]
    pub fn new(
        target_directory: impl Into<String>,
        residual_filter: Option<String>,
        is_directory_change: bool,
    ) -> Self {
        Self {
            target_directory: target_directory.into(),
            residual_filter: residual_filter.filter(|r| !r.is_empty()),
            is_directory_change,
        }
    }

    /// The filter field contents implied by this decision.
    ///
    /// ```
    /// use keynav::NavigationDecision;
    ///
    /// let decision = NavigationDecision::new("beep/", Some("boop".into()), false);
    /// assert_eq!(decision.filter_value(), "beep/boop");
    /// ```
    #[must_use]
    pub fn filter_value(&self) -> String {
        let mut value = self.target_directory.clone();
        if let Some(residual) = &self.residual_filter {
            value.push_str(residual);
        }
        value
    }
}
