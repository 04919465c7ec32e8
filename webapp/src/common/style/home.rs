pub const HOME_STYLES: &str = r#"
/* Full-viewport hero */
.hero {
  position: relative;
  height: 100vh;
  overflow: hidden;
  background-color: black;
}

.hero-video {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.hero-scrim {
  position: absolute;
  inset: 0;
  background-color: rgba(0, 0, 0, 0.4);
}

.hero-copy {
  position: relative;
  z-index: 1;
  height: 100%;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  text-align: center;
  padding: 0 var(--space-6);
}

.hero-wordmark {
  width: min(640px, 85vw);
}

.hero-tagline {
  margin-top: var(--space-6);
  font-size: 1.375rem;
  letter-spacing: 0.02em;
  color: var(--neutral-200);
}

/* Category showcase grid */
.showcase {
  padding: var(--space-16) 0;
}

.showcase-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: var(--space-6);
}

.showcase-tile {
  position: relative;
  display: flex;
  flex-direction: column;
  min-height: 440px;
  padding: var(--space-8);
  border-radius: var(--radius-xl);
  overflow: hidden;
  cursor: pointer;
  transition: transform var(--transition-normal) var(--easing-standard),
              box-shadow var(--transition-normal) var(--easing-standard);
}

.showcase-tile:hover {
  transform: translateY(-4px);
  box-shadow: var(--shadow-lg);
}

.showcase-tile--underwater {
  background-color: var(--underwater);
  color: white;
}

.showcase-tile--surfacewater {
  background-color: var(--surfacewater);
  color: var(--surfacewater-ink);
}

.showcase-tile--land {
  background-color: var(--land);
  color: var(--land-ink);
}

.showcase-tile--air {
  background-color: var(--air);
  color: var(--text-inverse);
}

/* solid pill picks up each theme's ink */
.showcase-tile--underwater .btn-pill--solid {
  background-color: white;
  color: var(--underwater);
}

.showcase-tile--surfacewater .btn-pill--solid {
  background-color: var(--surfacewater-ink);
  color: white;
}

.showcase-tile--land .btn-pill--solid {
  background-color: var(--land-ink);
  color: white;
}

.showcase-copy h3 {
  font-size: 2rem;
  font-weight: 700;
}

.showcase-copy p {
  margin-top: var(--space-2);
  max-width: 32ch;
  opacity: 0.85;
}

.showcase-ctas {
  display: flex;
  gap: var(--space-3);
  margin-top: var(--space-5);
}

.showcase-art {
  margin-top: auto;
  align-self: center;
  padding-top: var(--space-6);
}

.showcase-art img {
  display: block;
  max-height: 220px;
  max-width: 100%;
  object-fit: contain;
  filter: drop-shadow(0 16px 24px rgba(0, 0, 0, 0.35));
}

/* About section */
.about {
  padding: var(--space-16) 0;
  border-top: 1px solid var(--border);
  text-align: center;
}

.about h2 {
  font-size: 2rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
}

.about p {
  max-width: 65ch;
  margin: 0 auto;
  color: var(--text-secondary);
}

@media (max-width: 900px) {
  .showcase-grid {
    grid-template-columns: 1fr;
  }

  .showcase-tile {
    min-height: 380px;
  }

  .hero-tagline {
    font-size: 1.125rem;
  }
}
"#;
