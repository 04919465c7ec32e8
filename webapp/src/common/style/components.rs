pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard),
              box-shadow var(--transition-fast) var(--easing-standard);
  border: none;
  outline: none;
}

.btn:focus {
  box-shadow: 0 0 0 3px rgba(31, 168, 208, 0.3);
}

.btn:active {
  transform: translateY(1px);
}

.btn:disabled {
  opacity: 0.6;
  cursor: default;
  transform: none;
}

.btn-primary {
  background-color: var(--primary);
  color: white;
}

.btn-primary:hover:not(:disabled) {
  background-color: var(--primary-dark);
}

.btn-secondary {
  background-color: var(--neutral-800);
  color: var(--text-primary);
}

.btn-secondary:hover:not(:disabled) {
  background-color: var(--neutral-700);
}

.btn-lg {
  padding: var(--space-3) var(--space-5);
  font-size: 1.125rem;
}

/* Pill buttons used on showcase tiles and banners */
.btn-pill {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-2) var(--space-5);
  border-radius: var(--radius-full);
  font-weight: 600;
  font-size: 0.9rem;
  cursor: pointer;
  border: 1px solid transparent;
  transition: background-color var(--transition-fast) var(--easing-standard),
              color var(--transition-fast) var(--easing-standard);
}

.btn-pill:hover {
  text-decoration: none;
}

.btn-pill--solid {
  background-color: rgba(0, 0, 0, 0.85);
  color: white;
}

.btn-pill--solid:hover {
  background-color: black;
}

.btn-pill--ghost {
  background-color: transparent;
  border-color: currentColor;
  color: inherit;
}

.btn-pill--ghost:hover {
  background-color: rgba(0, 0, 0, 0.15);
}

/* Form Elements */
.form-group {
  margin-bottom: var(--space-4);
}

.form-label {
  display: block;
  margin-bottom: var(--space-2);
  font-weight: 500;
  font-size: 0.9rem;
  color: var(--text-secondary);
}

.form-input,
.form-textarea {
  width: 100%;
  padding: var(--space-2) var(--space-3);
  border: 1px solid var(--neutral-700);
  border-radius: var(--radius-md);
  background-color: var(--neutral-800);
  color: var(--text-primary);
  transition: border-color var(--transition-fast) var(--easing-standard),
              box-shadow var(--transition-fast) var(--easing-standard);
}

.form-input::placeholder,
.form-textarea::placeholder {
  color: var(--text-tertiary);
}

.form-input:focus,
.form-textarea:focus {
  border-color: var(--border-focus);
  box-shadow: 0 0 0 3px rgba(31, 168, 208, 0.2);
  outline: none;
}

.form-textarea {
  min-height: 120px;
  resize: vertical;
}

.form-error {
  margin-top: var(--space-1);
  font-size: 0.875rem;
  color: var(--error);
}

/* Layout utilities */
.container {
  width: 100%;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.section-title {
  font-size: 1.5rem;
  font-weight: 600;
  margin-bottom: var(--space-4);
  color: var(--text-primary);
}
"#;
