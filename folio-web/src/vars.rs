pub const SECTION_SUB_TEXT: &str =
    "sm:text-[18px] text-[14px] text-secondary uppercase tracking-wider";
pub const SECTION_HEAD_TEXT: &str =
    "text-white font-black md:text-[60px] sm:text-[50px] xs:text-[40px] \
     text-[30px]";
pub const SECTION_PADDING: &str = "sm:px-16 px-6 sm:py-16 py-10";
pub const INPUT_CLASS: &str =
    "bg-tertiary py-3 px-4 placeholder:text-secondary text-white rounded-lg \
     outline-none border-none font-medium";
