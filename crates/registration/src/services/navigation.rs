use std::sync::Arc;

/// Side effects the form triggers once a registration succeeds.
///
/// Both calls are fire-and-forget. A navigator that cannot move on has no way
/// to report it back into the form.
pub trait Navigator: Send + Sync {
    /// Show a confirmation to the user.
    fn confirm(&self, message: &str);

    /// Move to another view of the application.
    fn navigate(&self, route: &str);
}

impl<T: Navigator + ?Sized> Navigator for Arc<T> {
    fn confirm(&self, message: &str) {
        (**self).confirm(message);
    }

    fn navigate(&self, route: &str) {
        (**self).navigate(route);
    }
}
