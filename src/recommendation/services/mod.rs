//! Service orchestration for session recommendations.

pub mod session;

pub use session::{
    RECOMMENDATIONS_CACHE_KEY, SessionRecommendationService, SessionServiceError,
    SessionServiceResult,
};
