//! Table-driven mapping from a tool call to an ordered list of [`Effect`]s.
//!
//! Each [`Rule`] pairs a keyword set with the argument requirements of one
//! effect. Keywords are case-sensitive substrings. File rules look at the call's
//! command string, inventory and social rules at the raw tool name. Rules are
//! evaluated in table order and every matching rule contributes, so the
//! standard table (writes ahead of reads in each domain) lets a read observe a
//! write issued by the same call.

use thiserror::Error;

use crate::{CallSite, Effect, EffectKind, ToolArgs};

const WRITE_KEYWORDS: &[&str] = &["write", "create", "save", "update"];
const READ_KEYWORDS: &[&str] = &["read", "view", "cat", "search", "list"];
const INVENTORY_ADD_KEYWORDS: &[&str] = &["add", "buy"];
const INVENTORY_GET_KEYWORDS: &[&str] = &["inventory"];
const POST_KEYWORDS: &[&str] = &["post", "send"];
const FEED_KEYWORDS: &[&str] = &["get", "feed", "timeline"];

const FILE_CONTENT_ARGS: &[&str] = &["content", "file_text", "text"];
const POST_TEXT_ARGS: &[&str] = &["content", "text", "message"];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("argument '{arg}' must be a {expected}, got {found}")]
    ArgType {
        arg: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Backend domain a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainGroup {
    File,
    Inventory,
    Social,
}

/// Which string of the call a rule's keywords are tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSubject {
    Command,
    ToolName,
}

type BuildFn = fn(&ToolArgs) -> Result<Option<Effect>, ClassifyError>;

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub kind: &'static str,
    pub group: DomainGroup,
    pub subject: RuleSubject,
    pub keywords: &'static [&'static str],
    build: BuildFn,
}

impl Rule {
    pub const fn new(
        kind: &'static str,
        group: DomainGroup,
        subject: RuleSubject,
        keywords: &'static [&'static str],
        build: BuildFn,
    ) -> Self {
        Self {
            kind,
            group,
            subject,
            keywords,
            build,
        }
    }

    pub fn matches(&self, site: &CallSite<'_>) -> bool {
        let haystack = match self.subject {
            RuleSubject::Command => site.command,
            RuleSubject::ToolName => site.tool_name,
        };
        self.keywords.iter().any(|kw| haystack.contains(kw))
    }

    /// Builds the effect from the call arguments; `Ok(None)` when a required
    /// argument is missing.
    pub fn build(&self, args: &ToolArgs) -> Result<Option<Effect>, ClassifyError> {
        (self.build)(args)
    }
}

fn build_write_file(args: &ToolArgs) -> Result<Option<Effect>, ClassifyError> {
    let Some(path) = args.present_str("path")? else {
        return Ok(None);
    };
    Ok(args
        .first_text(FILE_CONTENT_ARGS)
        .map(|content| Effect::write_file(path, content)))
}

fn build_read_file(args: &ToolArgs) -> Result<Option<Effect>, ClassifyError> {
    Ok(args.present_str("path")?.map(Effect::read_file))
}

fn build_add_item(args: &ToolArgs) -> Result<Option<Effect>, ClassifyError> {
    Ok(args.present_str("item")?.map(Effect::add_inventory_item))
}

fn build_get_inventory(_: &ToolArgs) -> Result<Option<Effect>, ClassifyError> {
    Ok(Some(Effect::GetInventory))
}

fn build_post(args: &ToolArgs) -> Result<Option<Effect>, ClassifyError> {
    Ok(args.first_text(POST_TEXT_ARGS).map(Effect::post_content))
}

fn build_get_feed(_: &ToolArgs) -> Result<Option<Effect>, ClassifyError> {
    Ok(Some(Effect::GetFeed))
}

const STANDARD_RULES: [Rule; 6] = [
    Rule::new(
        EffectKind::FILE_WRITE,
        DomainGroup::File,
        RuleSubject::Command,
        WRITE_KEYWORDS,
        build_write_file,
    ),
    Rule::new(
        EffectKind::FILE_READ,
        DomainGroup::File,
        RuleSubject::Command,
        READ_KEYWORDS,
        build_read_file,
    ),
    Rule::new(
        EffectKind::INVENTORY_ADD,
        DomainGroup::Inventory,
        RuleSubject::ToolName,
        INVENTORY_ADD_KEYWORDS,
        build_add_item,
    ),
    Rule::new(
        EffectKind::INVENTORY_GET,
        DomainGroup::Inventory,
        RuleSubject::ToolName,
        INVENTORY_GET_KEYWORDS,
        build_get_inventory,
    ),
    Rule::new(
        EffectKind::SOCIAL_POST,
        DomainGroup::Social,
        RuleSubject::ToolName,
        POST_KEYWORDS,
        build_post,
    ),
    Rule::new(
        EffectKind::SOCIAL_FEED,
        DomainGroup::Social,
        RuleSubject::ToolName,
        FEED_KEYWORDS,
        build_get_feed,
    ),
];

/// Category of a generated tool, as labelled in the tool catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolCategory {
    /// File Management, Operating System, Development Tools.
    FileSystem,
    /// Social Media, Communication Tools.
    Social,
    Gaming,
    Memory,
    General,
}

impl ToolCategory {
    pub fn from_label(label: &str) -> Self {
        if ["File Management", "Operating System", "Development Tools"]
            .iter()
            .any(|l| label.contains(l))
        {
            ToolCategory::FileSystem
        } else if label.contains("Social Media") || label.contains("Communication") {
            ToolCategory::Social
        } else if label.contains("Gaming") {
            ToolCategory::Gaming
        } else if label.contains("Memory") {
            ToolCategory::Memory
        } else {
            ToolCategory::General
        }
    }

    /// Domain groups whose rules apply to tools of this category.
    pub fn groups(self) -> &'static [DomainGroup] {
        match self {
            ToolCategory::FileSystem => &[DomainGroup::File],
            ToolCategory::Social => &[DomainGroup::Social],
            ToolCategory::Gaming => &[DomainGroup::Inventory],
            ToolCategory::Memory | ToolCategory::General => &[],
        }
    }
}

#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<Rule>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::standard()
    }
}

impl Classifier {
    /// Every domain group, in the standard order.
    pub fn standard() -> Self {
        Self {
            rules: STANDARD_RULES.to_vec(),
        }
    }

    /// Standard table restricted to the groups of `category`.
    pub fn for_category(category: ToolCategory) -> Self {
        let groups = category.groups();
        Self {
            rules: STANDARD_RULES
                .iter()
                .filter(|rule| groups.contains(&rule.group))
                .copied()
                .collect(),
        }
    }

    pub fn with_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn classify(&self, tool_name: &str, args: &ToolArgs) -> Result<Vec<Effect>, ClassifyError> {
        let site = CallSite::new(tool_name, args)?;
        let mut effects = Vec::new();
        for rule in self.rules.iter().filter(|rule| rule.matches(&site)) {
            if let Some(effect) = rule.build(args)? {
                effects.push(effect);
            }
        }
        Ok(effects)
    }
}
