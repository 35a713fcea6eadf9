//! Import path rewriting for relocated artifact files
//!
//! Upstream, artifact files sit one level above their installed location and
//! reach the shared utility module with a relative `../utils` specifier.
//! Installed files live one directory deeper, in `<components_dir>/<artifact>/`,
//! so that specifier becomes `../../utils`. Project aliases such as
//! `$lib/utils` do not depend on where the file lives and are left alone.
//!
//! Every pattern is anchored on the opening quote of a specifier and consumes
//! nothing past `utils`. No replacement produces text a pattern matches, so
//! [`rewrite`] is idempotent. Anything that does not match passes through
//! untouched.

use lazy_regex::{Lazy, Regex, lazy_regex};

static PARENT_UTILS: Lazy<Regex> = lazy_regex!(r#"(["'])\.\./utils\b"#);

const INSTALLED_UTILS: &str = "${1}../../utils";

static RULES: [&Lazy<Regex>; 1] = [&PARENT_UTILS];

/// Rewrite utility imports so they resolve from the installed location
pub fn rewrite(contents: &str) -> String {
    RULES.iter().fold(contents.to_string(), |text, pattern| {
        pattern.replace_all(&text, INSTALLED_UTILS).into_owned()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rewrites_parent_utils_import() {
        let input = "import { cn } from '../utils';\n";
        assert_eq!(rewrite(input), "import { cn } from '../../utils';\n");
    }

    #[test]
    fn test_keeps_quote_style_and_subpath() {
        let input = r#"import { cn } from "../utils/cn.js";"#;
        assert_eq!(rewrite(input), r#"import { cn } from "../../utils/cn.js";"#);
    }

    #[test]
    fn test_leaves_project_aliases_alone() {
        let input = "import { a } from '$lib/utils';\nimport { b } from \"@/lib/utils/b\";\n";
        assert_eq!(rewrite(input), input);
    }

    #[test]
    fn test_rewrites_dynamic_imports_and_exports() {
        let input = "export * from '../utils';\nconst m = await import('../utils/lazy');";
        assert_eq!(
            rewrite(input),
            "export * from '../../utils';\nconst m = await import('../../utils/lazy');"
        );
    }

    #[test]
    fn test_leaves_unrelated_imports_alone() {
        let input = concat!(
            "import { html } from 'lit';\n",
            "import { x } from '../utilities';\n",
            "import { y } from './utils';\n",
            "import { z } from '../../utils';\n",
            "// ../utils mentioned in a comment\n",
        );
        assert_eq!(rewrite(input), input);
    }

    #[test]
    fn test_second_pass_changes_nothing() {
        let input = "import { cn } from '../utils';\nimport '$lib/utils/theme.css';\n";
        let once = rewrite(input);
        assert_eq!(rewrite(&once), once);
    }

    fn import_like() -> impl Strategy<Value = String> {
        let specifier = prop_oneof![
            Just("../utils"),
            Just("../../utils"),
            Just("$lib/utils"),
            Just("@/lib/utils"),
            Just("./utils"),
            Just("lit"),
        ];
        let tail = prop_oneof![Just(""), Just("/cn"), Just(".js"), Just("s")];
        let quote = prop_oneof![Just('\''), Just('"')];
        (quote, specifier, tail, "[ -~\n]{0,12}").prop_map(|(q, path, tail, noise)| {
            format!("import x from {q}{path}{tail}{q};{noise}")
        })
    }

    proptest! {
        #[test]
        fn prop_rewrite_is_idempotent(input in "[ -~\n]{0,80}") {
            let once = rewrite(&input);
            prop_assert_eq!(rewrite(&once), once);
        }

        #[test]
        fn prop_rewrite_is_idempotent_on_imports(lines in prop::collection::vec(import_like(), 0..8)) {
            let input = lines.join("\n");
            let once = rewrite(&input);
            prop_assert_eq!(rewrite(&once), once);
        }
    }
}
