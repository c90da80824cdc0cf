//! Global CSS styles for the 64-bit World portfolio.
//!
//! Retro pixel aesthetic: warm paper background, hard ink outlines, chunky
//! offset shadows.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PAPER (Backgrounds) */
  --paper: #fff9ed;
  --panel: #ffffff;
  --panel-soft: rgba(255, 255, 255, 0.8);

  /* INK (Outlines, Text) */
  --ink: #111827;
  --text-body: #404040;
  --text-muted: #737373;
  --border-soft: #e5e5e5;

  /* Pixel shadow */
  --shadow-hard: 3px 3px 0 #111;
  --shadow-big: 4px 4px 0 #111;

  /* Typography */
  --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 2.5rem;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  background: var(--paper);
  color: var(--ink);
  font-family: var(--font-sans);
  line-height: 1.5;
}

a {
  color: inherit;
  text-decoration: none;
}

img {
  display: block;
  max-width: 100%;
}

/* === Page Shell === */
.page {
  min-height: 100vh;
  width: 100%;
}

.page-main {
  max-width: 72rem;
  margin: 0 auto;
  padding: 0 2rem 6rem;
}

.page-footer {
  padding: 2.5rem 0;
  text-align: center;
  font-size: var(--text-xs);
  color: var(--text-muted);
}

/* === Nav Header === */
.nav-header {
  position: sticky;
  top: 0;
  z-index: 10;
  border-bottom: 1px solid var(--border-soft);
  background: var(--panel-soft);
  backdrop-filter: blur(6px);
}

.nav-header__inner {
  max-width: 72rem;
  margin: 0 auto;
  padding: 0.75rem 2rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.nav-header__title {
  font-weight: 900;
  letter-spacing: -0.02em;
  font-size: 1.25rem;
}

.nav-header__links {
  display: flex;
  gap: 0.75rem;
}

.nav-link {
  display: inline-flex;
  align-items: center;
  padding: 0.25rem 0.75rem;
  border: 1px solid var(--ink);
  border-radius: 0.25rem;
  background: var(--panel);
  box-shadow: var(--shadow-hard);
  font-size: var(--text-sm);
}

.nav-link:active {
  transform: translate(2px, 2px);
  box-shadow: 1px 1px 0 #111;
}

/* === Hero === */
.hero-slot {
  padding: 3rem 0;
}

.hero {
  position: relative;
  overflow: hidden;
  border: 1px solid var(--border-soft);
  border-radius: 1rem;
  background: linear-gradient(to bottom, #e0f2fe, #fffbeb);
  padding: 1.5rem;
}

.hero__top {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.hero__avatar {
  width: 5rem;
  height: 5rem;
  flex-shrink: 0;
  border: 2px solid #000;
  border-radius: 0.25rem;
  box-shadow: var(--shadow-big);
  background: repeating-linear-gradient(45deg, #111827 0 2px, #f59e0b 2px 4px);
}

.hero__title {
  font-size: var(--text-3xl);
  font-weight: 900;
  letter-spacing: -0.02em;
}

.hero__tagline {
  margin-top: 0.5rem;
  max-width: 60ch;
  color: var(--text-body);
}

.hero__badges {
  margin-top: 1.5rem;
  display: grid;
  grid-template-columns: repeat(4, minmax(0, 1fr));
  gap: 0.75rem;
  font-size: var(--text-xs);
}

.hero__hint {
  margin-top: 1.5rem;
  font-size: var(--text-sm);
  color: var(--text-body);
}

.info-badge {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  border: 1px solid #000;
  border-radius: 0.25rem;
  background: var(--panel);
  padding: 0.5rem;
  box-shadow: var(--shadow-hard);
}

.info-badge__icon {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 1.5rem;
  height: 1.5rem;
  border: 1px solid #000;
}

.info-badge__label {
  font-size: 10px;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  color: var(--text-muted);
}

.info-badge__value {
  font-weight: 700;
}

/* === Sections === */
.section {
  min-height: 90vh;
  width: 100%;
  padding: 4rem 0;
  display: flex;
  align-items: center;
  justify-content: center;
}

.section__inner {
  width: 100%;
}

.section__header {
  margin-bottom: 2rem;
}

.section__title {
  font-size: var(--text-2xl);
  font-weight: 900;
  letter-spacing: -0.02em;
  text-shadow: 2px 2px 0 #fff;
}

.section__subtitle {
  margin-top: 0.5rem;
  color: var(--text-body);
  font-size: var(--text-sm);
}

.section__body {
  border: 1px solid var(--border-soft);
  border-radius: 0.75rem;
  background: var(--panel-soft);
  backdrop-filter: blur(6px);
  padding: 1.5rem;
}

.stage-context {
  margin-top: 1rem;
  font-size: var(--text-sm);
  color: var(--text-body);
}

/* === Pixel Map === */
.map {
  width: 100%;
  display: flex;
  flex-direction: column;
  align-items: center;
}

.map__frame {
  position: relative;
  width: 100%;
  overflow: hidden;
  border: 1px solid var(--border-soft);
  border-radius: 1rem;
  background: linear-gradient(to bottom, #fffbeb, #f0f9ff);
}

.map__canvas {
  width: 100%;
  height: auto;
  display: block;
  image-rendering: pixelated;
}

.map__country {
  cursor: pointer;
}

.map__legend {
  margin-top: 0.75rem;
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 0.75rem;
  font-size: var(--text-xs);
}

.legend-chip {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.25rem 0.5rem;
  border: 1px solid var(--border-soft);
  border-radius: 0.25rem;
  background: var(--panel);
}

.legend-chip__swatch {
  width: 0.75rem;
  height: 0.75rem;
  border: 1px solid #000;
}

/* === Gallery === */
.gallery-slot {
  margin-top: 1.5rem;
}

.gallery-heading {
  margin-bottom: 0.75rem;
  font-weight: 700;
}

.photo-gallery {
  display: grid;
  grid-template-columns: repeat(3, minmax(0, 1fr));
  gap: 0.75rem;
}

.photo-gallery__tile {
  position: relative;
  overflow: hidden;
  border: 1px solid #000;
  border-radius: 0.5rem;
  box-shadow: var(--shadow-hard);
}

.photo-gallery__img {
  width: 100%;
  height: 8rem;
  object-fit: cover;
}

.photo-gallery__empty {
  grid-column: 1 / -1;
  font-size: var(--text-sm);
  color: var(--text-muted);
}

/* === Contact / CV === */
.contact-links {
  display: grid;
  gap: 1rem;
  grid-template-columns: repeat(3, minmax(0, 1fr));
}

.contact-link {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.75rem 1rem;
  border: 1px solid #000;
  border-radius: 0.25rem;
  background: var(--panel);
  box-shadow: var(--shadow-hard);
}

.contact-link:active {
  transform: translate(2px, 2px);
  box-shadow: 1px 1px 0 #111;
}

.cv-row {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 0.75rem;
}

.cv-hint {
  font-size: var(--text-sm);
  color: var(--text-muted);
}
"#;
