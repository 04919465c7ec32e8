pub const CATALOG_STYLES: &str = r#"
/* Product cards */
.product-card {
  cursor: pointer;
  outline: none;
}

.product-card-frame {
  position: relative;
  aspect-ratio: 16 / 10;
  border-radius: var(--radius-lg);
  overflow: hidden;
  background-color: var(--surface-raised);
}

.product-card-image {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform var(--transition-slow) var(--easing-standard);
}

.product-card:hover .product-card-image,
.product-card:focus .product-card-image {
  transform: scale(1.04);
}

.product-card-video {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  object-fit: cover;
  opacity: 0;
  transition: opacity var(--transition-normal) var(--easing-standard);
}

.product-card-video.visible {
  opacity: 1;
}

.product-card-title {
  margin-top: var(--space-3);
  font-size: 1rem;
  font-weight: 600;
  color: var(--text-primary);
}

.product-card-blurb {
  margin-top: var(--space-1);
  font-size: 0.875rem;
  color: var(--text-secondary);
  overflow: hidden;
  display: -webkit-box;
  -webkit-line-clamp: 2;
  -webkit-box-orient: vertical;
}

/* Horizontal product strips */
.product-strip {
  padding: var(--space-10) 0;
}

.strip-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: var(--space-4);
}

.strip-title {
  font-size: 1.375rem;
  font-weight: 600;
}

.strip-controls {
  display: flex;
  gap: var(--space-2);
}

.strip-control {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 40px;
  height: 40px;
  border-radius: var(--radius-full);
  border: 1px solid var(--neutral-700);
  background: transparent;
  color: var(--text-primary);
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard);
}

.strip-control:hover {
  background-color: var(--neutral-800);
}

.strip-track {
  display: flex;
  gap: var(--space-4);
  overflow-x: auto;
  scroll-snap-type: x mandatory;
  padding-bottom: var(--space-2);
  scrollbar-width: none;
}

.strip-track::-webkit-scrollbar {
  display: none;
}

.strip-item {
  flex: 0 0 auto;
  width: 300px;
  scroll-snap-align: start;
}

/* Category detail pages */
.category-hero {
  padding: calc(var(--header-height) + var(--space-16)) 0 var(--space-10);
  text-align: center;
}

.category-hero h1 {
  font-size: 2.5rem;
  font-weight: 700;
}

.category-hero p {
  margin-top: var(--space-3);
  color: var(--text-secondary);
  font-size: 1.125rem;
}

.feature-banner {
  position: relative;
  display: flex;
  align-items: flex-end;
  min-height: 420px;
  border-radius: var(--radius-xl);
  overflow: hidden;
  background-size: cover;
  background-position: center;
  background-color: var(--surface-raised);
}

.feature-scrim {
  position: absolute;
  inset: 0;
  background: linear-gradient(to top, rgba(0, 0, 0, 0.85) 10%, rgba(0, 0, 0, 0.1) 60%);
}

.feature-copy {
  position: relative;
  z-index: 1;
  padding: var(--space-8);
}

.feature-kicker {
  font-size: 0.8rem;
  font-weight: 600;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  color: var(--primary-light);
}

.feature-copy h2 {
  margin-top: var(--space-2);
  font-size: 2rem;
  font-weight: 700;
}

.feature-copy p {
  margin-top: var(--space-2);
  max-width: 55ch;
  color: var(--neutral-300);
}

.feature-ctas {
  display: flex;
  gap: var(--space-3);
  margin-top: var(--space-5);
}

/* banner tiles sit on dark imagery, so the pills invert */
.feature-ctas .btn-pill--solid {
  background-color: white;
  color: black;
}

.feature-ctas .btn-pill--solid:hover {
  background-color: var(--neutral-200);
}

.feature-ctas .btn-pill--ghost {
  background-color: rgba(255, 255, 255, 0.1);
  border-color: transparent;
  color: white;
  backdrop-filter: blur(4px);
}

.feature-ctas .btn-pill--ghost:hover {
  background-color: rgba(255, 255, 255, 0.2);
}

.category-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
  gap: var(--space-6);
  margin: var(--space-10) 0;
}

.category-tile {
  position: relative;
  display: flex;
  align-items: flex-end;
  min-height: 260px;
  border-radius: var(--radius-xl);
  overflow: hidden;
  background-size: cover;
  background-position: center;
  background-color: var(--surface-raised);
  transition: transform var(--transition-normal) var(--easing-standard);
}

.category-tile:hover {
  transform: translateY(-4px);
}

.category-tile .feature-copy {
  padding: var(--space-5);
}

.category-tile h3 {
  font-size: 1.25rem;
  font-weight: 600;
}

.category-tile p {
  margin-top: var(--space-1);
  font-size: 0.875rem;
  color: var(--neutral-300);
}

/* Unknown route fallback */
.not-found {
  padding: calc(var(--header-height) + var(--space-16)) var(--space-4) var(--space-16);
  text-align: center;
}

.not-found h1 {
  font-size: 2rem;
  font-weight: 700;
}

.not-found p {
  margin: var(--space-3) 0 var(--space-6);
  color: var(--text-secondary);
}

@media (max-width: 640px) {
  .strip-item {
    width: 240px;
  }

  .category-hero h1 {
    font-size: 2rem;
  }
}
"#;
