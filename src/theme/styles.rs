//! Global CSS styles for the portfolio.
//!
//! Dark slate glass by default; `[data-theme="light"]` swaps the custom
//! properties for the light palette.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root,
[data-theme="dark"] {
  /* Surfaces */
  --bg: #0f172a;
  --bg-deep: #020617;
  --surface: #1e293b;
  --surface-strong: #334155;
  --glass: rgba(30, 41, 59, 0.55);
  --glass-border: rgba(148, 163, 184, 0.16);

  /* Text */
  --text-primary: #f1f5f9;
  --text-secondary: rgba(241, 245, 249, 0.72);
  --text-muted: rgba(241, 245, 249, 0.5);

  /* Accents */
  --cyan: #22d3ee;
  --emerald: #34d399;
  --purple: #a78bfa;
  --blue: #60a5fa;
  --pink: #f472b6;
  --amber: #fbbf24;
  --accent: var(--cyan);

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Layout */
  --nav-height: 64px;
  --radius: 16px;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-reveal: 600ms cubic-bezier(0.22, 1, 0.36, 1);
}

[data-theme="light"] {
  --bg: #f8fafc;
  --bg-deep: #f1f5f9;
  --surface: #ffffff;
  --surface-strong: #e2e8f0;
  --glass: rgba(255, 255, 255, 0.75);
  --glass-border: #e2e8f0;

  --text-primary: #0f172a;
  --text-secondary: rgba(15, 23, 42, 0.72);
  --text-muted: rgba(15, 23, 42, 0.5);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  overflow: hidden;
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--bg);
  color: var(--text-primary);
  line-height: 1.6;
}

a {
  color: inherit;
  text-decoration: none;
}

ul, ol {
  list-style: none;
}

button {
  font: inherit;
  color: inherit;
  background: none;
  border: none;
  cursor: pointer;
}

.app-shell {
  height: 100vh;
  background: var(--bg);
  color: var(--text-primary);
  transition: background var(--transition-normal), color var(--transition-normal);
}

.page-scroll {
  height: 100vh;
  overflow-y: auto;
  scroll-behavior: smooth;
}

.text-gradient {
  background: linear-gradient(90deg, var(--cyan), var(--purple));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.glass {
  background: var(--glass);
  border: 1px solid var(--glass-border);
  border-radius: var(--radius);
  backdrop-filter: blur(12px);
}

/* === Accent tokens === */
.accent-cyan { --accent: var(--cyan); }
.accent-emerald { --accent: var(--emerald); }
.accent-purple { --accent: var(--purple); }
.accent-blue { --accent: var(--blue); }
.accent-pink { --accent: var(--pink); }
.accent-amber { --accent: var(--amber); }

/* === Reveal === */
.reveal {
  opacity: 0;
  transform: translateY(24px);
  transition: opacity var(--transition-reveal), transform var(--transition-reveal);
}

.reveal.revealed {
  opacity: 1;
  transform: none;
}

/* === Buttons === */
.btn-primary,
.btn-secondary,
.btn-ghost {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.75rem 1.5rem;
  border-radius: 999px;
  font-weight: 600;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast),
    background var(--transition-fast);
}

.btn-primary {
  background: linear-gradient(90deg, var(--cyan), var(--blue));
  color: #0f172a;
}

.btn-primary:hover {
  transform: translateY(-2px);
  box-shadow: 0 8px 24px rgba(34, 211, 238, 0.3);
}

.btn-secondary {
  border: 1px solid var(--cyan);
  color: var(--cyan);
}

.btn-secondary:hover {
  background: rgba(34, 211, 238, 0.1);
}

.btn-ghost {
  padding: 0.5rem 1rem;
  background: var(--glass);
  border: 1px solid var(--glass-border);
  font-weight: 500;
}

.btn-ghost:hover {
  border-color: var(--cyan);
}

.btn-icon {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 40px;
  height: 40px;
  border-radius: 12px;
  background: var(--glass);
  border: 1px solid var(--glass-border);
  transition: border-color var(--transition-fast);
}

.btn-icon:hover {
  border-color: var(--cyan);
}

/* === Navigation === */
.nav-bar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  height: var(--nav-height);
  background: var(--glass);
  border-bottom: 1px solid var(--glass-border);
  backdrop-filter: blur(16px);
  transition: transform var(--transition-normal), opacity var(--transition-normal);
}

.nav-bar--scrolling {
  transform: translateY(-100%);
  opacity: 0;
}

.nav-inner {
  max-width: 1200px;
  height: 100%;
  margin: 0 auto;
  padding: 0 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.nav-brand {
  font-family: var(--font-mono);
  font-weight: 700;
  font-size: 1.25rem;
}

.nav-brand__prompt {
  color: var(--cyan);
  margin-right: 0.5rem;
}

.nav-links {
  display: flex;
  gap: 0.25rem;
}

.nav-link {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 1rem;
  border-radius: 999px;
  color: var(--text-secondary);
  transition: color var(--transition-fast), background var(--transition-fast);
}

.nav-link:hover {
  color: var(--text-primary);
}

.nav-link.active {
  color: var(--cyan);
  background: rgba(34, 211, 238, 0.12);
}

.nav-actions {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.nav-menu-toggle {
  display: none;
}

.nav-drawer-backdrop {
  position: fixed;
  inset: 0;
  z-index: 60;
  background: rgba(2, 6, 23, 0.6);
}

.nav-drawer {
  position: fixed;
  top: 0;
  right: 0;
  bottom: 0;
  z-index: 70;
  width: min(80vw, 320px);
  padding: 5rem 1.5rem 2rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  background: var(--surface);
  border-left: 1px solid var(--glass-border);
  animation: drawer-in var(--transition-normal);
}

.nav-drawer .nav-link {
  border-radius: 12px;
  padding: 0.75rem 1rem;
}

.nav-drawer__resume {
  margin-top: auto;
  justify-content: center;
}

@keyframes drawer-in {
  from { transform: translateX(100%); }
  to { transform: none; }
}

.theme-toggle {
  color: var(--amber);
}

/* === Mobile bottom bar === */
.mobile-nav {
  position: fixed;
  left: 0;
  right: 0;
  bottom: 0;
  z-index: 50;
  display: flex;
  justify-content: space-around;
  padding: 0.5rem 0.75rem;
  background: var(--glass);
  border-top: 1px solid var(--glass-border);
  backdrop-filter: blur(16px);
}

.mobile-nav-item {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.125rem;
  padding: 0.375rem 0.75rem;
  border-radius: 12px;
  color: var(--text-muted);
}

.mobile-nav-item.active {
  color: var(--cyan);
  background: rgba(34, 211, 238, 0.12);
}

.mobile-nav-label {
  display: none;
  font-size: 0.75rem;
}

.mobile-nav-item.active .mobile-nav-label {
  display: block;
}

/* === Sections === */
.section {
  min-height: 100vh;
  max-width: 1200px;
  margin: 0 auto;
  padding: calc(var(--nav-height) + 3rem) 1.5rem 4rem;
}

.section-header {
  text-align: center;
  margin-bottom: 3rem;
}

.section-title {
  font-size: 2.5rem;
  font-weight: 800;
}

.section-subtitle {
  margin-top: 0.5rem;
  color: var(--text-secondary);
}

/* === Hero === */
.hero {
  position: relative;
  display: flex;
  flex-direction: column;
  justify-content: center;
  gap: 3rem;
}

.hero-backdrop {
  position: absolute;
  inset: 0;
  z-index: 0;
  pointer-events: none;
}

.particle-canvas {
  width: 100%;
  height: 100%;
}

.hero-content,
.hero-stats {
  position: relative;
  z-index: 1;
}

.hero-greeting {
  font-family: var(--font-mono);
  color: var(--cyan);
}

.hero-name {
  font-size: 4rem;
  font-weight: 800;
  line-height: 1.1;
}

.hero-headline {
  margin-top: 0.75rem;
  font-size: 1.5rem;
  color: var(--text-primary);
}

.hero-bio {
  margin-top: 1rem;
  max-width: 40rem;
  color: var(--text-secondary);
}

.hero-actions {
  margin-top: 2rem;
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
}

.hero-stats {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 1rem;
}

.stat-card {
  padding: 1.25rem;
  text-align: center;
  background: var(--glass);
  border: 1px solid var(--glass-border);
  border-radius: var(--radius);
}

.stat-value {
  display: block;
  font-size: 2rem;
  font-weight: 800;
  color: var(--accent);
}

.stat-label {
  font-size: 0.875rem;
  color: var(--text-muted);
}

/* === Skills === */
.skills-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1.5rem;
}

.skill-card {
  padding: 1.75rem;
}

.skill-card__title {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 1.5rem;
  color: var(--accent);
}

.skill-item + .skill-item {
  margin-top: 1.25rem;
}

.skill-item__header {
  display: flex;
  justify-content: space-between;
  margin-bottom: 0.5rem;
}

.skill-item__level {
  font-family: var(--font-mono);
  color: var(--accent);
}

.skill-track {
  height: 8px;
  border-radius: 999px;
  background: var(--surface-strong);
  overflow: hidden;
}

.skill-bar {
  height: 100%;
  border-radius: inherit;
  background: linear-gradient(90deg, var(--accent), var(--blue));
  transition: width 1s ease-out;
}

/* === Experience === */
.timeline-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 2rem;
}

.timeline-heading {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 1.5rem;
  color: var(--cyan);
}

.timeline {
  position: relative;
  padding-left: 1.5rem;
  border-left: 2px solid var(--glass-border);
}

.timeline-entry {
  position: relative;
  padding: 1.25rem 1.5rem;
  margin-bottom: 1.25rem;
}

.timeline-marker {
  position: absolute;
  left: calc(-1.5rem - 7px);
  top: 1.5rem;
  width: 12px;
  height: 12px;
  border-radius: 50%;
  background: var(--cyan);
  box-shadow: 0 0 12px rgba(34, 211, 238, 0.6);
}

.timeline-entry__header {
  display: flex;
  justify-content: space-between;
  gap: 1rem;
}

.timeline-entry__period {
  display: inline-flex;
  align-items: center;
  gap: 0.375rem;
  font-family: var(--font-mono);
  font-size: 0.875rem;
  color: var(--text-muted);
}

.timeline-entry__place {
  color: var(--emerald);
}

.timeline-entry__bullets {
  margin-top: 0.75rem;
}

.timeline-entry__bullets li {
  position: relative;
  padding-left: 1rem;
  color: var(--text-secondary);
}

.timeline-entry__bullets li::before {
  content: '';
  position: absolute;
  left: 0;
  top: 0.65em;
  width: 6px;
  height: 6px;
  border-radius: 50%;
  background: var(--purple);
}

/* === Projects === */
.projects-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(340px, 1fr));
  gap: 1.5rem;
}

.project-card {
  display: flex;
  flex-direction: column;
  overflow: hidden;
  background: var(--glass);
  border: 1px solid var(--glass-border);
  border-radius: var(--radius);
  opacity: 0;
  transform: translateY(24px);
  transition: opacity var(--transition-reveal), transform var(--transition-reveal),
    border-color var(--transition-fast);
}

.project-card.revealed {
  opacity: 1;
  transform: none;
}

.project-card:hover {
  border-color: var(--accent);
}

.project-media {
  position: relative;
  aspect-ratio: 16 / 10;
  overflow: hidden;
}

.project-image,
.project-image__img {
  width: 100%;
  height: 100%;
}

.project-image__img {
  object-fit: cover;
  transition: opacity var(--transition-normal);
}

.project-image__img.loading {
  opacity: 0;
}

.project-image__spinner {
  position: absolute;
  top: 50%;
  left: 50%;
  width: 32px;
  height: 32px;
  margin: -16px 0 0 -16px;
  border: 3px solid var(--glass-border);
  border-top-color: var(--accent);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

.project-badge {
  position: absolute;
  top: 0.75rem;
  left: 0.75rem;
  padding: 0.25rem 0.75rem;
  border-radius: 999px;
  font-size: 0.75rem;
  font-weight: 700;
  background: var(--amber);
  color: #0f172a;
}

.carousel-prev,
.carousel-next {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  z-index: 2;
}

.carousel-prev { left: 0.75rem; }
.carousel-next { right: 0.75rem; }

.carousel-dots {
  position: absolute;
  bottom: 0.75rem;
  left: 50%;
  transform: translateX(-50%);
  z-index: 2;
  display: flex;
  gap: 0.375rem;
}

.carousel-dot {
  width: 8px;
  height: 8px;
  border-radius: 50%;
  background: rgba(241, 245, 249, 0.4);
}

.carousel-dot.active {
  background: var(--accent);
}

.carousel-counter {
  position: absolute;
  top: 0.75rem;
  right: 0.75rem;
  z-index: 2;
  padding: 0.125rem 0.5rem;
  border-radius: 999px;
  font-family: var(--font-mono);
  font-size: 0.75rem;
  background: rgba(2, 6, 23, 0.6);
  color: #f1f5f9;
}

.project-overlay {
  position: absolute;
  inset: 0;
  z-index: 1;
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: center;
  gap: 1rem;
  padding: 1.5rem;
  text-align: center;
  background: rgba(2, 6, 23, 0.85);
  color: #f1f5f9;
  opacity: 0;
  pointer-events: none;
  transition: opacity var(--transition-normal);
}

.project-overlay.visible {
  opacity: 1;
  pointer-events: auto;
}

.project-overlay__links {
  display: flex;
  gap: 0.75rem;
}

.project-body {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  padding: 1.5rem;
}

.project-title {
  font-size: 1.25rem;
  color: var(--accent);
}

.project-description {
  color: var(--text-secondary);
}

.project-highlight {
  display: flex;
  flex-direction: column;
  padding: 0.5rem 0.75rem;
  border-left: 2px solid var(--accent);
}

.project-highlight span {
  font-size: 0.875rem;
  color: var(--text-muted);
}

.tech-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.tech-tag {
  padding: 0.25rem 0.75rem;
  border-radius: 999px;
  font-family: var(--font-mono);
  font-size: 0.75rem;
  background: var(--surface-strong);
  color: var(--text-secondary);
}

.project-links {
  display: flex;
  gap: 1rem;
  margin-top: auto;
}

.project-link {
  display: inline-flex;
  align-items: center;
  gap: 0.375rem;
  color: var(--accent);
}

/* === Contact === */
.contact-grid {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 1.25rem;
}

.contact-card {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
  padding: 1.75rem 1rem;
  text-align: center;
}

.contact-card:hover {
  border-color: var(--accent);
}

.contact-card__icon {
  color: var(--accent);
}

.contact-card__label {
  font-weight: 700;
}

.contact-card__value {
  font-size: 0.875rem;
  color: var(--text-muted);
  word-break: break-all;
}

.contact-footer {
  margin-top: 3rem;
  display: flex;
  justify-content: center;
}

.site-footer {
  padding: 2rem 1.5rem 6rem;
  text-align: center;
  color: var(--text-muted);
  border-top: 1px solid var(--glass-border);
}

.site-footer__note {
  font-size: 0.875rem;
}

/* === Terminal intro === */
.terminal-overlay {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  background: #020617;
  transition: opacity 100ms ease;
}

.terminal-overlay.fading {
  opacity: 0;
}

.terminal-window {
  width: min(90vw, 640px);
  border-radius: 12px;
  overflow: hidden;
  background: #0f172a;
  border: 1px solid rgba(148, 163, 184, 0.2);
  box-shadow: 0 24px 64px rgba(0, 0, 0, 0.5);
  font-family: var(--font-mono);
}

.terminal-titlebar {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.75rem 1rem;
  background: #1e293b;
}

.terminal-dot {
  width: 12px;
  height: 12px;
  border-radius: 50%;
}

.terminal-dot--red { background: #f87171; }
.terminal-dot--amber { background: #fbbf24; }
.terminal-dot--green { background: #34d399; }

.terminal-title {
  flex: 1;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.375rem;
  font-size: 0.875rem;
  color: rgba(241, 245, 249, 0.6);
}

.terminal-close {
  color: rgba(241, 245, 249, 0.6);
}

.terminal-body {
  min-height: 200px;
  padding: 1.25rem;
  color: #34d399;
}

.terminal-line {
  white-space: pre-wrap;
}

.terminal-cursor {
  margin-left: 2px;
}

.terminal-cursor.hidden {
  visibility: hidden;
}

.terminal-footer {
  display: flex;
  justify-content: flex-end;
  padding: 0.5rem 1rem 1rem;
}

.terminal-skip {
  font-size: 0.875rem;
  color: rgba(241, 245, 249, 0.6);
}

.terminal-skip:hover {
  color: #22d3ee;
}

/* === Responsive === */
@media (max-width: 1024px) {
  .hero-stats,
  .contact-grid {
    grid-template-columns: repeat(2, 1fr);
  }
}

@media (max-width: 768px) {
  .nav-links,
  .nav-resume {
    display: none;
  }

  .nav-menu-toggle {
    display: inline-flex;
  }

  .hero-name {
    font-size: 2.5rem;
  }

  .skills-grid,
  .timeline-grid,
  .contact-grid {
    grid-template-columns: 1fr;
  }

  .projects-grid {
    grid-template-columns: 1fr;
  }
}

@media (prefers-reduced-motion: reduce) {
  .reveal,
  .project-card,
  .skill-bar {
    transition: none;
  }
}
"#;
