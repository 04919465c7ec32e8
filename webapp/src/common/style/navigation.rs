pub const NAV_STYLES: &str = r#"
/* Fixed site header */
.app-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  background-color: rgba(0, 0, 0, 0.95);
  backdrop-filter: blur(8px);
  border-bottom: 1px solid var(--border);
  z-index: 40;
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-6);
}

.logo img {
  display: block;
  height: 40px;
}

.nav-links {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.nav-item {
  display: flex;
}

.nav-link {
  color: var(--text-secondary);
  font-weight: 500;
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
  transition: color var(--transition-fast) var(--easing-standard),
  background-color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover {
  color: var(--text-primary);
  background-color: var(--neutral-800);
  text-decoration: none;
}

.nav-link.active {
  color: var(--primary-light);
  background-color: rgba(31, 168, 208, 0.12);
}

.nav-toggle {
  display: none;
  align-items: center;
  justify-content: center;
  width: 40px;
  height: 40px;
  border: none;
  border-radius: var(--radius-md);
  background: transparent;
  color: var(--text-primary);
  cursor: pointer;
}

.nav-toggle:hover {
  background-color: var(--neutral-800);
}

/* Category dropdown */
.menu-backdrop {
  position: fixed;
  inset: 0;
  z-index: 30;
}

.menu-panel {
  position: fixed;
  top: var(--header-height);
  left: 0;
  right: 0;
  z-index: 35;
  background-color: rgba(0, 0, 0, 0.97);
  border-bottom: 1px solid var(--border);
  box-shadow: var(--shadow-lg);
  animation: menu-drop var(--transition-fast) var(--easing-standard);
}

.menu-panel-inner {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: var(--space-6);
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
  gap: var(--space-3);
}

.menu-entry {
  display: flex;
  align-items: center;
  gap: var(--space-3);
  padding: var(--space-3);
  border-radius: var(--radius-lg);
  color: var(--text-primary);
  transition: background-color var(--transition-fast) var(--easing-standard);
}

.menu-entry:hover {
  background-color: var(--neutral-800);
  text-decoration: none;
}

.menu-entry img {
  width: 72px;
  height: 48px;
  object-fit: cover;
  border-radius: var(--radius-md);
  background-color: var(--neutral-900);
  flex-shrink: 0;
}

.menu-entry h4 {
  font-size: 0.9rem;
  font-weight: 600;
}

.menu-entry p {
  font-size: 0.8rem;
  color: var(--text-secondary);
  overflow: hidden;
  display: -webkit-box;
  -webkit-line-clamp: 2;
  -webkit-box-orient: vertical;
}

.menu-view-all {
  grid-column: 1 / -1;
  justify-self: start;
  padding: var(--space-2) var(--space-3);
  font-weight: 500;
  font-size: 0.9rem;
  color: var(--primary-light);
}

@keyframes menu-drop {
  from { opacity: 0; transform: translateY(-8px); }
  to { opacity: 1; transform: translateY(0); }
}

/* Mobile drawer */
.drawer-backdrop {
  position: fixed;
  inset: 0;
  background-color: rgba(0, 0, 0, 0.6);
  z-index: 45;
}

.drawer {
  position: fixed;
  top: 0;
  right: 0;
  bottom: 0;
  width: var(--drawer-width);
  max-width: 85vw;
  background-color: var(--surface);
  border-left: 1px solid var(--border);
  z-index: 50;
  display: flex;
  flex-direction: column;
  animation: drawer-in var(--transition-normal) var(--easing-standard);
}

.drawer-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  height: var(--header-height);
  padding: 0 var(--space-4);
  border-bottom: 1px solid var(--border);
}

.drawer-header img {
  height: 32px;
}

.drawer-links {
  display: flex;
  flex-direction: column;
  padding: var(--space-4);
  gap: var(--space-1);
  overflow-y: auto;
}

.drawer-link {
  padding: var(--space-3);
  border-radius: var(--radius-md);
  color: var(--text-primary);
  font-weight: 500;
}

.drawer-link:hover {
  background-color: var(--neutral-800);
  text-decoration: none;
}

.drawer-cta {
  margin-top: auto;
  padding: var(--space-4);
  border-top: 1px solid var(--border);
}

.drawer-cta .btn {
  width: 100%;
}

@keyframes drawer-in {
  from { transform: translateX(100%); }
  to { transform: translateX(0); }
}

@media (max-width: 900px) {
  .nav-links {
    display: none;
  }

  .nav-toggle {
    display: flex;
  }
}
"#;
