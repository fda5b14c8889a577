//! Server-rendered pages.
//!
//! Each handler builds a view model from the shared content and renders an
//! Askama template from `templates/`. Templates only loop and print; every
//! decision (selected options, active links, hrefs) is made here.

use askama::Template;
use axum::{
    extract::{Form, Path, Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use chrono::Datelike;
use tracing::error;

use super::{AppState, SiteQuery};
use crate::branding::{page_title, SITE_DESCRIPTION, SITE_NAME};
use crate::config::CounterConfig;
use crate::contact::{ContactErrors, ContactField, ContactFormSubmission, SubmitError};
use crate::content::Content;
use crate::counter::{percentage, CounterSpec, StatValue};
use crate::directory::{DirectoryStats, DirectoryView, QuickFilter, SiteFilter, ViewMode, ALL};
use crate::models::{
    Achievement, BoardMember, Certification, ContactDetails, CoreValue, HeritageSite, ImpactArea,
    OrganizationProfile, Service, Stat, Testimonial,
};
use crate::sections::Section;

/// Number of sites featured on the home page.
const FEATURED_SITES: usize = 3;

/// Characters of description shown on site cards.
const EXCERPT_CHARS: usize = 140;

// ============================================================================
// Shared view models
// ============================================================================

/// One navbar entry.
pub struct NavLink {
    /// Link text
    pub label: &'static str,
    /// Target path
    pub path: &'static str,
    /// Whether this is the current section
    pub active: bool,
}

/// One social network link.
pub struct SocialLink {
    /// Network name
    pub name: &'static str,
    /// Profile URL
    pub url: String,
}

/// Everything the base layout needs: head, navbar and footer.
pub struct Chrome<'a> {
    /// Document title
    pub title: String,
    /// Meta description
    pub description: &'static str,
    /// Short site name
    pub site_name: &'static str,
    /// Full organization name
    pub org_name: &'a str,
    /// Organization tagline
    pub tagline: &'a str,
    /// Navbar entries
    pub nav: Vec<NavLink>,
    /// Footer contact details
    pub contact: &'a ContactDetails,
    /// `tel:` link for the footer phone number
    pub phone_uri: String,
    /// Footer social links
    pub social: Vec<SocialLink>,
    /// Year for the copyright line
    pub year: i32,
}

impl<'a> Chrome<'a> {
    fn new(content: &'a Content, active: Option<Section>, title: &str) -> Self {
        let org = content.organization();
        Self {
            title: page_title(title),
            description: SITE_DESCRIPTION,
            site_name: SITE_NAME,
            org_name: &org.name,
            tagline: &org.tagline,
            nav: Section::ALL
                .into_iter()
                .map(|section| NavLink {
                    label: section.label(),
                    path: section.path(),
                    active: Some(section) == active,
                })
                .collect(),
            contact: &org.contact,
            phone_uri: org.contact.phone_uri(),
            social: org
                .social_links
                .entries()
                .into_iter()
                .map(|(name, url)| SocialLink {
                    name,
                    url: url.to_string(),
                })
                .collect(),
            year: chrono::Utc::now().year(),
        }
    }
}

/// An animated statistic, rendered with the data attributes read by
/// `assets/site.js`.
pub struct CounterView {
    /// Caption
    pub label: String,
    /// Inline SVG icon (may be empty)
    pub icon_svg: String,
    /// Accent CSS class
    pub accent_class: &'static str,
    /// Text shown before the animation runs
    pub initial_text: String,
    /// Text shown once finished
    pub final_text: String,
    /// Whether the value is numeric and should animate
    pub animated: bool,
    /// Counter parameters
    pub spec: CounterSpec,
}

impl CounterView {
    fn from_stat(stat: &Stat, config: &CounterConfig) -> Self {
        Self::from_text(
            &stat.label,
            &stat.value,
            stat.icon.svg(),
            stat.accent.css_class(),
            config,
        )
    }

    fn from_text(
        label: &str,
        value: &str,
        icon_svg: String,
        accent_class: &'static str,
        config: &CounterConfig,
    ) -> Self {
        match StatValue::parse(value) {
            Some(parsed) => {
                let spec = parsed.to_spec(config.duration_ms, config.visibility_threshold);
                Self {
                    label: label.to_string(),
                    icon_svg,
                    accent_class,
                    initial_text: spec.render(spec.start),
                    final_text: spec.render(spec.end),
                    animated: true,
                    spec,
                }
            }
            None => Self {
                label: label.to_string(),
                icon_svg,
                accent_class,
                initial_text: value.to_string(),
                final_text: value.to_string(),
                animated: false,
                spec: CounterSpec::new(0.0),
            },
        }
    }
}

/// A percentage bar with its animated figure.
pub struct ProgressView {
    /// Caption
    pub label: String,
    /// Bar width, 0-100
    pub percentage: u8,
    /// Animated figure
    pub counter: CounterView,
}

impl ProgressView {
    fn new(label: &str, current: usize, max: usize, config: &CounterConfig) -> Self {
        let percentage = percentage(current as f64, max as f64);
        Self {
            label: label.to_string(),
            percentage,
            counter: CounterView::from_text(
                label,
                &format!("{percentage}%"),
                String::new(),
                "accent-amber",
                config,
            ),
        }
    }
}

/// A heritage site as shown on cards and rows.
pub struct SiteCard<'a> {
    /// The site
    pub site: &'a HeritageSite,
    /// Status badge class
    pub status_class: String,
    /// Detail page URL
    pub path: String,
    /// Shortened description
    pub excerpt: String,
}

impl<'a> SiteCard<'a> {
    fn new(site: &'a HeritageSite) -> Self {
        Self {
            site,
            status_class: format!("status-{}", site.status.slug()),
            path: format!("/heritage/sites/{}", site.id),
            excerpt: site.excerpt(EXCERPT_CHARS),
        }
    }
}

/// An `<option>` of a select box.
pub struct SelectOption {
    /// Submitted value
    pub value: String,
    /// Visible text
    pub label: String,
    /// Whether it is the current choice
    pub selected: bool,
}

/// A link that changes the gallery filter.
pub struct FilterLink {
    /// Link text
    pub label: String,
    /// Target URL
    pub href: String,
    /// Whether the link describes the current state
    pub active: bool,
}

fn heritage_href(filter: &SiteFilter, view: ViewMode) -> String {
    let query = filter.to_query_string(view);
    if query.is_empty() {
        Section::Heritage.path().to_string()
    } else {
        format!("{}?{query}", Section::Heritage.path())
    }
}

/// Builds select options with `current` marked.
///
/// A `current` value missing from `options` is appended as a selected option
/// so the form shows the filter that produced the results.
fn select_options(
    options: Vec<String>,
    current: Option<&str>,
    all_label: &str,
) -> Vec<SelectOption> {
    let current = current.unwrap_or(ALL);
    let known = options.iter().any(|value| value == current);
    let mut select: Vec<SelectOption> = options
        .into_iter()
        .map(|value| SelectOption {
            label: if value == ALL {
                all_label.to_string()
            } else {
                value.clone()
            },
            selected: value == current,
            value,
        })
        .collect();

    if !known {
        select.push(SelectOption {
            value: current.to_string(),
            label: current.to_string(),
            selected: true,
        });
    }
    select
}

fn render<T: Template>(status: StatusCode, template: &T) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            error!("Template error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("<h1>500 Internal Server Error</h1>".to_string()),
            )
                .into_response()
        }
    }
}

// ============================================================================
// Home
// ============================================================================

/// Landing page.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate<'a> {
    /// Layout
    pub chrome: Chrome<'a>,
    /// Organization profile
    pub org: &'a OrganizationProfile,
    /// Headline statistics
    pub stats: Vec<CounterView>,
    /// Service catalog
    pub services: &'a [Service],
    /// Featured sites
    pub featured: Vec<SiteCard<'a>>,
    /// Testimonials
    pub testimonials: &'a [Testimonial],
}

/// GET / - Landing page.
pub async fn home_page(State(state): State<AppState>) -> Response {
    let content = state.content();
    let org = content.organization();
    let template = HomeTemplate {
        chrome: Chrome::new(content, Some(Section::Home), ""),
        org,
        stats: org
            .stats
            .iter()
            .map(|s| CounterView::from_stat(s, &state.config().counter))
            .collect(),
        services: content.services(),
        featured: content
            .heritage_sites()
            .iter()
            .take(FEATURED_SITES)
            .map(SiteCard::new)
            .collect(),
        testimonials: content.testimonials(),
    };
    render(StatusCode::OK, &template)
}

// ============================================================================
// About
// ============================================================================

/// Organization profile page.
#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate<'a> {
    /// Layout
    pub chrome: Chrome<'a>,
    /// Organization profile
    pub org: &'a OrganizationProfile,
    /// Core values
    pub values: &'a [CoreValue],
    /// Board members
    pub board: &'a [BoardMember],
    /// Certifications
    pub certifications: &'a [Certification],
}

/// GET /about - Organization profile.
pub async fn about_page(State(state): State<AppState>) -> Response {
    let content = state.content();
    let org = content.organization();
    let template = AboutTemplate {
        chrome: Chrome::new(content, Some(Section::About), Section::About.label()),
        org,
        values: &org.values,
        board: &org.board_members,
        certifications: &org.certifications,
    };
    render(StatusCode::OK, &template)
}

// ============================================================================
// Services
// ============================================================================

/// Service catalog page.
#[derive(Template)]
#[template(path = "services.html")]
pub struct ServicesTemplate<'a> {
    /// Layout
    pub chrome: Chrome<'a>,
    /// All services
    pub services: &'a [Service],
}

/// GET /services - Service catalog.
pub async fn services_page(State(state): State<AppState>) -> Response {
    let content = state.content();
    let template = ServicesTemplate {
        chrome: Chrome::new(content, Some(Section::Services), Section::Services.label()),
        services: content.services(),
    };
    render(StatusCode::OK, &template)
}

/// Service detail page.
#[derive(Template)]
#[template(path = "service_detail.html")]
pub struct ServiceDetailTemplate<'a> {
    /// Layout
    pub chrome: Chrome<'a>,
    /// The service
    pub service: &'a Service,
    /// The other services
    pub others: Vec<&'a Service>,
}

/// GET /services/{slug} - Service detail.
pub async fn service_page(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let content = state.content();
    let Some(service) = content.service(&slug) else {
        return not_found(content, &format!("/services/{slug}"));
    };

    let template = ServiceDetailTemplate {
        chrome: Chrome::new(content, Some(Section::Services), &service.title),
        service,
        others: content
            .services()
            .iter()
            .filter(|s| s.slug != service.slug)
            .collect(),
    };
    render(StatusCode::OK, &template)
}

// ============================================================================
// Heritage
// ============================================================================

/// Heritage site gallery.
#[derive(Template)]
#[template(path = "heritage.html")]
pub struct HeritageTemplate<'a> {
    /// Layout
    pub chrome: Chrome<'a>,
    /// Stats over all sites
    pub stats: DirectoryStats,
    /// Current search text
    pub query: String,
    /// Whether the UNESCO clause is set
    pub unesco_only: bool,
    /// Category select
    pub category_options: Vec<SelectOption>,
    /// Status select
    pub status_options: Vec<SelectOption>,
    /// Preset filters
    pub quick_filters: Vec<FilterLink>,
    /// Active-filter chips
    pub chips: Vec<FilterLink>,
    /// Whether any filter is active
    pub has_filters: bool,
    /// Gallery URL with every filter cleared and the view kept
    pub clear_href: String,
    /// Grid/list toggle
    pub view_links: Vec<FilterLink>,
    /// List presentation
    pub is_list: bool,
    /// Value of the hidden view input
    pub view: &'static str,
    /// Matching sites
    pub results: Vec<SiteCard<'a>>,
    /// Number of matching sites
    pub shown: usize,
    /// Number of sites
    pub total: usize,
}

/// GET /heritage - Heritage gallery with search and filters.
pub async fn heritage_page(
    State(state): State<AppState>,
    Query(query): Query<SiteQuery>,
) -> Response {
    let content = state.content();
    let view_mode = ViewMode::parse(query.view.as_deref());
    let view = DirectoryView::evaluate(content.heritage_sites(), query.filter(), view_mode);
    let filter = &view.filter;

    let quick_filters = QuickFilter::ALL
        .into_iter()
        .map(|quick| {
            let applied = quick.apply(filter);
            FilterLink {
                label: quick.label().to_string(),
                active: applied == *filter,
                href: heritage_href(&applied, view_mode),
            }
        })
        .collect();

    let chips = filter
        .active_chips()
        .into_iter()
        .map(|chip| FilterLink {
            label: chip.label,
            href: heritage_href(&chip.cleared, view_mode),
            active: true,
        })
        .collect();

    let view_links = [ViewMode::Grid, ViewMode::List]
        .into_iter()
        .map(|mode| FilterLink {
            label: match mode {
                ViewMode::Grid => "Grid".to_string(),
                ViewMode::List => "List".to_string(),
            },
            href: heritage_href(filter, mode),
            active: mode == view_mode,
        })
        .collect();

    let template = HeritageTemplate {
        chrome: Chrome::new(content, Some(Section::Heritage), Section::Heritage.label()),
        stats: view.stats,
        query: filter.query.clone(),
        unesco_only: filter.unesco_only,
        category_options: select_options(
            view.facets.category_options(),
            filter.category.as_deref(),
            "All Categories",
        ),
        status_options: select_options(
            view.facets.status_options(),
            filter.status.as_deref(),
            "All Statuses",
        ),
        quick_filters,
        chips,
        has_filters: !filter.is_default(),
        clear_href: heritage_href(&SiteFilter::new(), view_mode),
        view_links,
        is_list: view_mode == ViewMode::List,
        view: view_mode.as_str(),
        shown: view.results.len(),
        total: view.total,
        results: view.results.iter().copied().map(SiteCard::new).collect(),
    };
    render(StatusCode::OK, &template)
}

/// Heritage site detail page.
#[derive(Template)]
#[template(path = "site_detail.html")]
pub struct SiteDetailTemplate<'a> {
    /// Layout
    pub chrome: Chrome<'a>,
    /// The site
    pub card: SiteCard<'a>,
}

/// GET /heritage/sites/{id} - Heritage site detail.
pub async fn site_page(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let content = state.content();
    let Some(site) = id.parse::<u32>().ok().and_then(|id| content.site(id)) else {
        return not_found(content, &format!("/heritage/sites/{id}"));
    };

    let template = SiteDetailTemplate {
        chrome: Chrome::new(content, Some(Section::Heritage), &site.name),
        card: SiteCard::new(site),
    };
    render(StatusCode::OK, &template)
}

// ============================================================================
// Impact
// ============================================================================

/// Impact and achievements page.
#[derive(Template)]
#[template(path = "impact.html")]
pub struct ImpactTemplate<'a> {
    /// Layout
    pub chrome: Chrome<'a>,
    /// Headline statistics
    pub stats: Vec<CounterView>,
    /// Impact areas
    pub areas: &'a [ImpactArea],
    /// Conservation progress bars
    pub progress: Vec<ProgressView>,
    /// Awards
    pub achievements: &'a [Achievement],
}

/// GET /impact - Impact statistics and achievements.
pub async fn impact_page(State(state): State<AppState>) -> Response {
    let content = state.content();
    let org = content.organization();
    let counter = &state.config().counter;
    let stats = DirectoryStats::from_sites(content.heritage_sites());

    let template = ImpactTemplate {
        chrome: Chrome::new(content, Some(Section::Impact), Section::Impact.label()),
        stats: org
            .stats
            .iter()
            .map(|s| CounterView::from_stat(s, counter))
            .collect(),
        areas: &org.impact_areas,
        progress: vec![
            ProgressView::new("Sites preserved", stats.preserved, stats.total, counter),
            ProgressView::new("UNESCO-listed sites", stats.unesco, stats.total, counter),
        ],
        achievements: &org.achievements,
    };
    render(StatusCode::OK, &template)
}

// ============================================================================
// Contact
// ============================================================================

/// Form values and errors as the template prints them.
pub struct ContactFormView {
    /// Name value
    pub name: String,
    /// Email value
    pub email: String,
    /// Phone value
    pub phone: String,
    /// Subject value
    pub subject: String,
    /// Message value
    pub message: String,
    /// Service select
    pub service_options: Vec<SelectOption>,
    /// Name error or empty
    pub name_error: String,
    /// Email error or empty
    pub email_error: String,
    /// Phone error or empty
    pub phone_error: String,
    /// Subject error or empty
    pub subject_error: String,
    /// Service error or empty
    pub service_error: String,
    /// Message error or empty
    pub message_error: String,
}

impl ContactFormView {
    fn new(content: &Content, form: &ContactFormSubmission, errors: &ContactErrors) -> Self {
        let error = |field: ContactField| errors.get(field).unwrap_or_default().to_string();
        let mut service_options = vec![SelectOption {
            value: String::new(),
            label: "Select a service".to_string(),
            selected: form.service().is_none(),
        }];
        service_options.extend(content.contact_service_options().into_iter().map(|option| {
            SelectOption {
                selected: form.service() == Some(option.as_str()),
                label: option.clone(),
                value: option,
            }
        }));

        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone().unwrap_or_default(),
            subject: form.subject.clone(),
            message: form.message.clone(),
            service_options,
            name_error: error(ContactField::Name),
            email_error: error(ContactField::Email),
            phone_error: error(ContactField::Phone),
            subject_error: error(ContactField::Subject),
            service_error: error(ContactField::Service),
            message_error: error(ContactField::Message),
        }
    }
}

/// Contact page with the form.
#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate<'a> {
    /// Layout
    pub chrome: Chrome<'a>,
    /// Organization contact details
    pub contact: &'a ContactDetails,
    /// Form state
    pub form: ContactFormView,
    /// Receipt id after a successful submission, else empty
    pub success_id: String,
    /// Form-level error, else empty
    pub form_error: String,
}

fn contact_template<'a>(
    content: &'a Content,
    form: &ContactFormSubmission,
    errors: &ContactErrors,
) -> ContactTemplate<'a> {
    ContactTemplate {
        chrome: Chrome::new(content, Some(Section::Contact), Section::Contact.label()),
        contact: &content.organization().contact,
        form: ContactFormView::new(content, form, errors),
        success_id: String::new(),
        form_error: String::new(),
    }
}

/// GET /contact - Contact details and empty form.
pub async fn contact_page(State(state): State<AppState>) -> Response {
    let template = contact_template(
        state.content(),
        &ContactFormSubmission::default(),
        &ContactErrors::default(),
    );
    render(StatusCode::OK, &template)
}

/// POST /contact - Submit the form and re-render it.
///
/// Accepted submissions get an empty form and a success notice; rejected
/// ones keep the entered values and show the field errors.
pub async fn contact_submit(
    State(state): State<AppState>,
    Form(form): Form<ContactFormSubmission>,
) -> Response {
    let content = state.content();

    match state.submitter.submit(form.clone()).await {
        Ok(ack) => {
            let mut template = contact_template(
                content,
                &ContactFormSubmission::default(),
                &ContactErrors::default(),
            );
            template.success_id = ack.id.to_string();
            render(StatusCode::OK, &template)
        }
        Err(SubmitError::Invalid(errors)) => {
            let mut template = contact_template(content, &form, &errors);
            template.form_error = "Please correct the highlighted fields.".to_string();
            render(StatusCode::UNPROCESSABLE_ENTITY, &template)
        }
        Err(err @ SubmitError::Unavailable { .. }) => {
            error!("Contact submission failed: {}", err);
            let mut template = contact_template(content, &form, &ContactErrors::default());
            template.form_error =
                "Your message could not be sent right now. Please try again later.".to_string();
            render(StatusCode::SERVICE_UNAVAILABLE, &template)
        }
    }
}

// ============================================================================
// Not found
// ============================================================================

/// 404 page.
#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate<'a> {
    /// Layout
    pub chrome: Chrome<'a>,
    /// Requested path
    pub path: String,
}

fn not_found(content: &Content, path: &str) -> Response {
    let template = NotFoundTemplate {
        chrome: Chrome::new(content, Section::from_path(path), "Page Not Found"),
        path: path.to_string(),
    };
    render(StatusCode::NOT_FOUND, &template)
}

/// Fallback for unknown paths.
pub async fn not_found_page(State(state): State<AppState>, uri: Uri) -> Response {
    not_found(state.content(), uri.path())
}
