use constcat::concat;

mod catalog;
mod components;
mod contact;
mod home;
mod navigation;
mod variables;

pub use catalog::CATALOG_STYLES;
pub use contact::CONTACT_STYLES;
pub use home::HOME_STYLES;

// Site-wide style bundling
pub const SITE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
}

img {
  max-width: 100%;
}

a {
  color: var(--primary);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}
"#,
    variables::CSS_VARIABLES,
    components::BASE_COMPONENTS,
    navigation::NAV_STYLES,
    r#"
/* Footer */
.site-footer {
  border-top: 1px solid var(--border);
  padding: var(--space-12) 0 var(--space-6);
}

.footer-grid {
  display: grid;
  grid-template-columns: 2fr 1fr 1fr;
  gap: var(--space-8);
}

.footer-brand img {
  height: 40px;
  margin-bottom: var(--space-4);
}

.footer-brand p {
  max-width: 40ch;
  color: var(--text-secondary);
  font-size: 0.9rem;
}

.footer-heading {
  font-size: 0.9rem;
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.08em;
  color: var(--text-primary);
  margin-bottom: var(--space-3);
}

.footer-links {
  list-style: none;
}

.footer-links li {
  margin-bottom: var(--space-2);
}

.footer-links a {
  color: var(--text-secondary);
  font-size: 0.9rem;
}

.footer-links a:hover {
  color: var(--text-primary);
  text-decoration: none;
}

.footer-contact p {
  color: var(--text-secondary);
  font-size: 0.9rem;
  margin-bottom: var(--space-2);
}

.footer-bottom {
  display: flex;
  align-items: center;
  justify-content: space-between;
  flex-wrap: wrap;
  gap: var(--space-3);
  margin-top: var(--space-10);
  padding-top: var(--space-6);
  border-top: 1px solid var(--border);
  font-size: 0.875rem;
  color: var(--text-tertiary);
}

.footer-policy {
  display: flex;
  gap: var(--space-5);
}

.footer-policy a {
  color: var(--text-tertiary);
}

.footer-policy a:hover {
  color: var(--text-primary);
  text-decoration: none;
}

@media (max-width: 900px) {
  .footer-grid {
    grid-template-columns: 1fr;
  }
}
"#,
);
