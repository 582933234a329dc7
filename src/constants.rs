//! Hydra vocabulary and client defaults

// === JSON-LD / Hydra keys ===
pub const HYDRA_ID_KEY: &str = "@id";
pub const HYDRA_MEMBER: &str = "hydra:member";
pub const HYDRA_MEMBER_PLAIN: &str = "member"; // API Platform 3+ without the hydra prefix
pub const HYDRA_TOTAL_ITEMS: &str = "hydra:totalItems";
pub const HYDRA_TOTAL_ITEMS_PLAIN: &str = "totalItems";
pub const HYDRA_VIEW: &str = "hydra:view";
pub const HYDRA_DESCRIPTION: &str = "hydra:description";
pub const PROBLEM_DETAIL: &str = "detail";

// === Envelope fields ===
pub const TOTAL_FIELD: &str = "total";
pub const VIEW_FIELD: &str = "view";

// === Query parameters ===
pub const ITEMS_PER_PAGE_PARAM: &str = "itemsPerPage";
pub const PAGINATION_PARAM: &str = "pagination";

// === Like filters ===
pub const TARGET_FILTER: &str = "target";
pub const OWNER_USERNAME_FILTER: &str = "owner.username";

// === HTTP ===
pub const JSON_LD_MIME: &str = "application/ld+json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// === Environment ===
pub const ENV_ENTRYPOINT: &str = "HYDRA_ENTRYPOINT";
pub const ENV_TOKEN: &str = "HYDRA_TOKEN";
pub const ENV_TIMEOUT_SECS: &str = "HYDRA_TIMEOUT_SECS";
