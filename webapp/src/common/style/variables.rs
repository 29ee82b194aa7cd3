pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #0D6EFD;
  --primary-dark: #0A58CA;
  --secondary: #6C757D;
  --secondary-dark: #5C636A;

  /* Neutrals */
  --neutral-50: #F8F9FA;
  --neutral-100: #F1F3F5;
  --neutral-200: #E9ECEF;
  --neutral-300: #DEE2E6;
  --neutral-500: #ADB5BD;
  --neutral-700: #495057;
  --neutral-900: #212529;

  /* Surfaces */
  --background: var(--neutral-50);
  --surface: #FFFFFF;
  --header-background: var(--neutral-900);

  /* Text */
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-700);
  --text-tertiary: var(--secondary);
  --text-inverse: #FFFFFF;

  --border: var(--neutral-300);

  /* Layout */
  --header-height: 56px;
  --container-width: 1140px;

  /* Spacing */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;

  --radius-sm: 4px;
  --radius-md: 6px;
  --radius-lg: 8px;

  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1);

  --transition-fast: 150ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}"#;
