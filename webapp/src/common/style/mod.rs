use constcat::concat;

mod components;
mod variables;

pub use components::BASE_COMPONENTS;
pub use variables::CSS_VARIABLES;

// everything the app needs in one style element, injected once at the root
pub const MODERN_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
}

a {
  color: var(--primary);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    r#"
/* Navigation shell */
.app-header {
  background-color: var(--header-background);
  position: sticky;
  top: 0;
  z-index: 10;
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.brand {
  color: var(--text-inverse);
  font-size: 1.25rem;
  font-weight: 600;
}

.brand:hover {
  text-decoration: none;
}

.page-content {
  padding: var(--space-6) 0;
}

.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.section-title {
  font-size: 2rem;
  font-weight: 500;
  margin-bottom: var(--space-4);
}

.loading-state,
.empty-state {
  padding: var(--space-8) 0;
  color: var(--text-tertiary);
  text-align: center;
}

.empty-state .btn {
  margin-top: var(--space-4);
}

/* Search */
.search-bar {
  margin-bottom: var(--space-6);
}

.search-form {
  display: flex;
  align-items: center;
  gap: var(--space-3);
}

.search-input {
  flex: 1;
}

.album-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: var(--space-6);
}

.album-card {
  display: flex;
  flex-direction: column;
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-sm);
  overflow: hidden;
}

.album-art {
  width: 100%;
  height: 200px;
  object-fit: cover;
}

.album-art.placeholder,
.album-art-large.placeholder {
  display: flex;
  align-items: center;
  justify-content: center;
  background-color: var(--neutral-200);
}

.placeholder-icon {
  font-size: 2.5rem;
  color: var(--neutral-500);
}

.album-info {
  display: flex;
  flex-direction: column;
  flex-grow: 1;
  gap: var(--space-2);
  padding: var(--space-4);
}

.album-title {
  font-size: 1.125rem;
  font-weight: 600;
}

.album-byline {
  color: var(--text-secondary);
  flex-grow: 1;
}

/* Album detail */
.album-detail h4 {
  color: var(--text-secondary);
  font-weight: 400;
}

.album-art-large {
  display: block;
  max-width: 300px;
  width: 300px;
  height: 300px;
  object-fit: cover;
  margin-bottom: var(--space-6);
}

.label-group {
  margin-bottom: var(--space-4);
}

.label-group h5,
.album-detail h5 {
  font-size: 1.125rem;
  font-weight: 500;
  margin-bottom: var(--space-2);
}
"#
);
