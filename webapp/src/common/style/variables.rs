pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #1FA8D0;          /* Brand cyan */
  --primary-light: #4FC3E8;    /* Lighter cyan for hover states */
  --primary-dark: #15819F;     /* Darker cyan for active states */

  /* Neutrals */
  --neutral-50: #F9FAFB;
  --neutral-100: #F3F4F6;
  --neutral-200: #E5E7EB;
  --neutral-300: #D1D5DB;
  --neutral-400: #9CA3AF;
  --neutral-500: #6B7280;
  --neutral-600: #4B5563;
  --neutral-700: #374151;
  --neutral-800: #1F2937;
  --neutral-900: #111827;

  /* Semantic Colors */
  --success: #10B981;
  --warning: #F59E0B;
  --error: #EF4444;

  /* Background and Surface Colors */
  --background: #000000;
  --surface: #0B0F17;
  --surface-raised: var(--neutral-900);

  /* Text Colors */
  --text-primary: var(--neutral-100);
  --text-secondary: var(--neutral-400);
  --text-tertiary: var(--neutral-500);
  --text-inverse: var(--neutral-900);

  /* Border Colors */
  --border: var(--neutral-800);
  --border-focus: var(--primary);

  /* Category themes */
  --underwater: #1FA8D0;
  --surfacewater: #E6F3FF;
  --surfacewater-ink: #0066CC;
  --land: #F4E4BC;
  --land-ink: #8B6914;
  --air: #E5E7EB;

  /* Layout */
  --header-height: 64px;
  --drawer-width: 280px;
  --container-width: 1280px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-5: 20px;
  --space-6: 24px;
  --space-8: 32px;
  --space-10: 40px;
  --space-12: 48px;
  --space-16: 64px;

  /* Border Radius */
  --radius-sm: 4px;
  --radius-md: 6px;
  --radius-lg: 8px;
  --radius-xl: 12px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.4);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.5), 0 2px 4px -1px rgba(0, 0, 0, 0.4);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.6), 0 4px 6px -2px rgba(0, 0, 0, 0.4);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 250ms;
  --transition-slow: 350ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}"#;
