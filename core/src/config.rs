//! Site configuration.
//!
//! Every external collaborator is reached through a fixed URL. The constants
//! below are the production values; [`SiteConfig`] bundles them so a
//! deployment or a test can swap any of them out.

use crate::schema::FormSchema;

/// Product name shown in the header and used in relay subject lines.
pub const PRODUCT_NAME: &str = "SHUSH.CASH";

/// Externally hosted dashboard, embedded in a frame.
pub const DASHBOARD_URL: &str = "https://shushingcash.streamlit.app/?embed=true&theme=dark";

/// Accessible title of the dashboard frame.
pub const DASHBOARD_TITLE: &str = "SHUSH.CASH Trading Dashboard";

/// Permissions granted to the embedded dashboard.
pub const EMBED_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// Form relay endpoint receiving the wizard payload.
pub const RELAY_ENDPOINT: &str = "https://formspree.io/f/xdankdyq";

/// Payment page opened after a successful relay post.
pub const CHECKOUT_URL: &str = "https://buy.stripe.com/6oU14m37v8mH50X3zlgA81d";

/// Service line on the confirmation summary.
pub const SERVICE_NAME: &str = "SMC Titan Setup";

/// One-time fee label.
pub const FEE_LABEL: &str = "£99.00";

/// How long the dashboard may take before the overlay reports a stall.
pub const EMBED_TIMEOUT_MS: u32 = 30_000;

/// Which shell layout to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShellLayout {
    /// Dashboard only.
    DirectEmbed,
    /// Dashboard plus a "Deploy" trigger opening the wizard.
    #[default]
    EmbedWithDeploy,
}

/// Runtime view of the site constants.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Brand shown in the header and page title.
    pub product_name: String,
    /// Hosted dashboard loaded in the frame.
    pub dashboard_url: String,
    /// Accessible title of the frame.
    pub dashboard_title: String,
    /// Frame permission list, `;`-separated.
    pub embed_allow: String,
    /// Form relay the wizard posts to.
    pub relay_endpoint: String,
    /// Stripe payment link opened after a successful post.
    pub checkout_url: String,
    pub service_name: String,
    /// Fee shown on the summary and the pay button.
    pub fee_label: String,
    /// Milliseconds before the frame is reported as stalled.
    pub embed_timeout_ms: u32,
    pub layout: ShellLayout,
    /// Wizard variant.
    pub schema: FormSchema,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            product_name: PRODUCT_NAME.to_string(),
            dashboard_url: DASHBOARD_URL.to_string(),
            dashboard_title: DASHBOARD_TITLE.to_string(),
            embed_allow: EMBED_ALLOW.to_string(),
            relay_endpoint: RELAY_ENDPOINT.to_string(),
            checkout_url: CHECKOUT_URL.to_string(),
            service_name: SERVICE_NAME.to_string(),
            fee_label: FEE_LABEL.to_string(),
            embed_timeout_ms: EMBED_TIMEOUT_MS,
            layout: ShellLayout::default(),
            schema: FormSchema::provisioning(),
        }
    }
}

impl SiteConfig {
    /// Same site, different form variant.
    pub fn with_schema(mut self, schema: FormSchema) -> Self {
        self.schema = schema;
        self
    }

    /// Same site, different shell layout.
    pub fn with_layout(mut self, layout: ShellLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Label of the final submit button.
    pub fn pay_label(&self) -> String {
        format!("PAY {} & DEPLOY", self.fee_label)
    }
}
