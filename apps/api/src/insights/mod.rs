// Profile insights: completeness score and improvement suggestions for the
// candidate profile that drives recommendations. Computed per request, never stored.

pub mod completeness;
pub mod handlers;
