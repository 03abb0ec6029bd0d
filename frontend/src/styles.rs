pub const CONTAINER: &str = "min-h-screen bg-gray-50 dark:bg-gray-900 w-full px-4 sm:px-6 lg:px-8";
pub const CONTAINER_LG: &str = "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6";
pub const PAGE_GRID: &str = "grid grid-cols-1 lg:grid-cols-[minmax(0,22rem)_1fr] gap-8 items-start";
pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] p-6";
pub const WHEEL_PANEL: &str = "flex flex-col items-center gap-6 bg-white dark:bg-gray-800 rounded-lg shadow-lg p-6";
pub const WHEEL_PANEL_FULLSCREEN: &str = "flex flex-col items-center justify-center gap-6 bg-gray-950 w-screen h-screen p-6";
pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-white bg-gradient-to-r from-blue-600 to-blue-700 hover:from-blue-700 hover:to-blue-800 shadow-lg hover:shadow-xl transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium border border-gray-300 dark:border-gray-600 text-gray-900 dark:text-white hover:bg-gray-50 dark:hover:bg-gray-700 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_REMOVE: &str = "text-sm px-2 py-1 rounded-md text-red-600 dark:text-red-400 hover:bg-red-50 dark:hover:bg-red-900/40 disabled:opacity-40 disabled:cursor-not-allowed";
pub const INPUT: &str = "block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-gray-300 dark:ring-gray-700 placeholder:text-gray-400 focus:ring-2 focus:ring-blue-600 disabled:opacity-60";
pub const FORM: &str = "mt-4 space-y-2";
pub const TEXT_H1: &str = "text-3xl font-bold text-gray-900 dark:text-white";
pub const TEXT_H2: &str = "text-xl font-bold text-gray-900 dark:text-white";
pub const TEXT_BODY: &str = "text-gray-600 dark:text-gray-300";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-900 dark:text-white";
pub const ENTRY_ROW: &str = "flex items-center justify-between py-2 border-b border-gray-100 dark:border-gray-700 last:border-0";
pub const COLOR_DOT: &str = "inline-block w-3 h-3 rounded-full mr-3 shrink-0";
pub const MODAL_BACKDROP: &str = "fixed inset-0 z-[1100] bg-black/80 backdrop-blur-md flex items-center justify-center p-4";
pub const MODAL_CARD: &str = "relative rounded-xl bg-gray-900 text-center shadow-xl px-10 py-8 max-w-md w-full border border-yellow-400/40";
