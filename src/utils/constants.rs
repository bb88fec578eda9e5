pub struct URL;

/// Just a collection of URLS
impl URL {
    /// The hosted backend script every action is posted to
    pub const API: &'static str = "https://script.google.com/macros/s/AKfycbw1JidqGTGHctOX6e-eX6I_TWVYxJ8t6scGLorrVrAE6aQJ4lU3WZG2VyU-Wnd1_xT-wA/exec";
}

/// Environment variable that overrides [URL::API]
pub const API_URL_ENV: &str = "SEKOLAH_API_URL";
