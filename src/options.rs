//! Shell configuration options.

/// Configuration options for a [`Shell`](crate::Shell) session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckrs::ShellOptions;
///
/// let options = ShellOptions::default()
///     .with_draw_count(10)
///     .with_shuffle_before_draw(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShellOptions {
    /// Number of cards taken by each draw action.
    pub draw_count: usize,
    /// Whether the deck is shuffled once when the session starts.
    pub shuffle_on_start: bool,
    /// Whether the available pile is reshuffled before every draw.
    pub shuffle_before_draw: bool,
    /// Whether previously drawn cards go back to the deck before every draw.
    ///
    /// On by default, so sorting shows only the latest batch. When off, draws
    /// accumulate until the deck runs out.
    pub return_drawn_before_draw: bool,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            draw_count: 20,
            shuffle_on_start: true,
            shuffle_before_draw: false,
            return_drawn_before_draw: true,
        }
    }
}

impl ShellOptions {
    /// Sets the number of cards per draw.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::ShellOptions;
    ///
    /// let options = ShellOptions::default().with_draw_count(5);
    /// assert_eq!(options.draw_count, 5);
    /// ```
    #[must_use]
    pub const fn with_draw_count(mut self, count: usize) -> Self {
        self.draw_count = count;
        self
    }

    /// Sets whether the deck is shuffled when the session starts.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::ShellOptions;
    ///
    /// let options = ShellOptions::default().with_shuffle_on_start(false);
    /// assert_eq!(options.shuffle_on_start, false);
    /// ```
    #[must_use]
    pub const fn with_shuffle_on_start(mut self, shuffle: bool) -> Self {
        self.shuffle_on_start = shuffle;
        self
    }

    /// Sets whether the available pile is reshuffled before each draw.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::ShellOptions;
    ///
    /// let options = ShellOptions::default().with_shuffle_before_draw(true);
    /// assert_eq!(options.shuffle_before_draw, true);
    /// ```
    #[must_use]
    pub const fn with_shuffle_before_draw(mut self, shuffle: bool) -> Self {
        self.shuffle_before_draw = shuffle;
        self
    }

    /// Sets whether drawn cards return to the deck before each draw.
    ///
    /// When enabled, the sort action only ever sees the latest draw.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::ShellOptions;
    ///
    /// let options = ShellOptions::default().with_return_drawn_before_draw(false);
    /// assert_eq!(options.return_drawn_before_draw, false);
    /// ```
    #[must_use]
    pub const fn with_return_drawn_before_draw(mut self, return_drawn: bool) -> Self {
        self.return_drawn_before_draw = return_drawn;
        self
    }
}
