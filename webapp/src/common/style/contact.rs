pub const CONTACT_STYLES: &str = r#"
/* Contact page */
.contact-page {
  padding: calc(var(--header-height) + var(--space-10)) 0 var(--space-16);
}

.contact-header {
  text-align: center;
  margin-bottom: var(--space-10);
}

.contact-header h1 {
  font-size: 2.25rem;
  font-weight: 700;
}

.contact-header p {
  margin-top: var(--space-3);
  color: var(--text-secondary);
}

.contact-layout {
  display: grid;
  grid-template-columns: 2fr 3fr;
  gap: var(--space-8);
  align-items: start;
}

/* Direct channels */
.contact-channels {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
}

.channel-card {
  display: flex;
  align-items: center;
  gap: var(--space-4);
  padding: var(--space-5);
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  color: inherit;
  transition: border-color var(--transition-fast) var(--easing-standard);
}

.channel-card:hover {
  border-color: var(--primary);
  text-decoration: none;
}

.channel-icon {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 44px;
  height: 44px;
  flex-shrink: 0;
  border-radius: var(--radius-full);
  background-color: rgba(31, 168, 208, 0.15);
  color: var(--primary-light);
}

.channel-card h3 {
  font-size: 1rem;
  font-weight: 600;
}

.channel-card p {
  margin-top: 2px;
  font-size: 0.875rem;
  color: var(--text-secondary);
  word-break: break-all;
}

/* Enquiry form */
.contact-form-panel {
  padding: var(--space-8);
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-xl);
}

.form-panel-title {
  font-size: 1.5rem;
  font-weight: 700;
}

.form-panel-blurb {
  margin: var(--space-2) 0 var(--space-5);
  font-size: 0.9rem;
  color: var(--text-secondary);
}

.form-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-4);
}

.form-banner {
  margin-bottom: var(--space-4);
  padding: var(--space-3);
  border: 1px solid var(--error);
  border-radius: var(--radius-md);
  background-color: rgba(239, 68, 68, 0.1);
  color: #FCA5A5;
  font-size: 0.875rem;
}

.btn-submit {
  width: 100%;
  margin-top: var(--space-2);
}

/* Post-send confirmation */
.sent-confirmation {
  text-align: center;
  padding: var(--space-10) var(--space-6);
}

.sent-icon {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 64px;
  height: 64px;
  margin: 0 auto var(--space-5);
  border-radius: var(--radius-full);
  background-color: rgba(16, 185, 129, 0.15);
  color: var(--success);
}

.sent-confirmation h2 {
  font-size: 1.5rem;
  font-weight: 700;
}

.sent-confirmation p {
  margin: var(--space-3) 0 var(--space-6);
  color: var(--text-secondary);
}

@media (max-width: 900px) {
  .contact-layout {
    grid-template-columns: 1fr;
  }

  .form-row {
    grid-template-columns: 1fr;
  }
}
"#;
