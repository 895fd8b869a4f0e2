pub mod limits {

    pub const POPULAR_CATEGORIES: usize = 6;

    pub const SCAM_ALERTS: u64 = 20;

    pub const HOME_SCAM_ALERTS: usize = 3;

    pub const HOME_NEWS: usize = 3;

    pub const REVIEW_TITLE_MAX: usize = 100;

    pub const REVIEW_TEXT_MIN: usize = 20;

    pub const REVIEW_TEXT_MAX: usize = 5000;
}

pub mod session_keys {

    pub const VERIFICATION_EMAIL: &str = "verification_email";

    pub const RESEND_AVAILABLE_AT: &str = "resend_available_at";

    pub const FLASH_ERRORS: &str = "flash_errors";

    pub const FLASH_SUCCESS: &str = "flash_success";

    pub const REVIEW_OLD_INPUT: &str = "review_old_input";
}

pub mod business_status {

    pub const ACTIVE: &str = "active";

    pub const PENDING: &str = "pending";

    pub const SUSPENDED: &str = "suspended";
}

pub mod complaint {

    pub const TYPE_SCAM: &str = "scam";

    pub const TYPE_SERVICE: &str = "service";

    pub const STATUS_ACTIVE: &str = "active";

    pub const STATUS_RESOLVED: &str = "resolved";
}
