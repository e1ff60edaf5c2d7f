//! Static catalog of legacy-pattern detection rules.
//!
//! Each rule is a plain data value: a compiled regex plus classification
//! metadata. Detection is a fold over this table; the table itself is
//! read-only after first access.

use crate::core::{PatternCategory, Severity, SuggestedTarget};
use once_cell::sync::Lazy;
use regex::Regex;

/// One detection rule: text pattern plus classification metadata.
pub struct DetectionRule {
    pub pattern: Regex,
    pub severity: Severity,
    pub category: PatternCategory,
    pub name: &'static str,
    pub description: &'static str,
    pub rationale: &'static str,
    pub recommendation: &'static str,
    pub modernization_path: &'static str,
    pub suggested_target: Option<SuggestedTarget>,
}

impl DetectionRule {
    /// Stable slug of the rule name: lowercase, non-alphanumeric runs
    /// collapsed to a single dash, leading/trailing dashes trimmed.
    pub fn id(&self) -> String {
        slugify(self.name)
    }
}

pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        let lower = c.to_ascii_lowercase();
        if lower.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(lower);
        } else {
            pending_dash = true;
        }
    }
    slug
}

fn rx(pattern: &str) -> Regex {
    // Catalog patterns are fixed strings validated by tests.
    Regex::new(pattern).expect("invalid catalog regex")
}

/// Enterprise-grade detection rules covering multiple ecosystems.
pub static DETECTION_RULES: Lazy<Vec<DetectionRule>> = Lazy::new(|| {
    vec![
        // ===== Security critical =====
        DetectionRule {
            pattern: rx(r"(?i)mysql_query|mysql_connect|mysql_real_escape_string"),
            severity: Severity::Critical,
            category: PatternCategory::Security,
            name: "Deprecated MySQL Functions (PHP)",
            description: "Legacy mysql_* functions detected - removed in PHP 7.0",
            rationale: "These functions are vulnerable to SQL injection and have been deprecated since PHP 5.5",
            recommendation: "Migrate to PDO or MySQLi with prepared statements immediately",
            modernization_path: "Use PDO with parameter binding",
            suggested_target: Some(SuggestedTarget::PlatformRefactor),
        },
        DetectionRule {
            pattern: rx(r"eval\s*\(|new Function\s*\("),
            severity: Severity::Critical,
            category: PatternCategory::Security,
            name: "Dynamic Code Execution",
            description: "eval() or Function constructor detected",
            rationale: "Allows arbitrary code execution and is a major security vulnerability",
            recommendation: "Refactor to use safe alternatives like JSON.parse or explicit function calls",
            modernization_path: "Remove eval() and use structured data parsing",
            suggested_target: None,
        },
        DetectionRule {
            pattern: rx(r#"(?i)(password|api[_-]?key|secret|token)\s*=\s*["'][^"']{8,}["']"#),
            severity: Severity::Critical,
            category: PatternCategory::Security,
            name: "Hardcoded Secrets",
            description: "Potential hardcoded credentials or API keys detected",
            rationale: "Hardcoded secrets in source code are a critical security vulnerability",
            recommendation: "Move all secrets to environment variables or secure vaults (AWS Secrets Manager, HashiCorp Vault)",
            modernization_path: "Use environment variables and secret management",
            suggested_target: None,
        },
        DetectionRule {
            pattern: rx(r#"(?i)SELECT\s+\*\s+FROM\s+\w+\s+WHERE\s+.*\+|"SELECT.*"\s*\+\s*\w+"#),
            severity: Severity::Critical,
            category: PatternCategory::Security,
            name: "SQL String Concatenation",
            description: "SQL queries built with string concatenation",
            rationale: "Highly vulnerable to SQL injection attacks",
            recommendation: "Use parameterized queries or ORM with parameter binding",
            modernization_path: "Implement prepared statements or ORM",
            suggested_target: None,
        },
        // ===== API & service patterns =====
        DetectionRule {
            pattern: rx(r"(?i)xmlns:soap|<soap:|<wsdl:|<definitions.*wsdl"),
            severity: Severity::High,
            category: PatternCategory::ApiDesign,
            name: "SOAP/WSDL Service",
            description: "SOAP/WSDL service implementation detected",
            rationale: "SOAP is verbose, complex, and difficult to maintain compared to modern REST APIs",
            recommendation: "Convert to RESTful API with OpenAPI 3.0 specification",
            modernization_path: "Transform to REST using strangler fig pattern",
            suggested_target: Some(SuggestedTarget::ApiNecromancer),
        },
        DetectionRule {
            pattern: rx(r"(?i)<system\.serviceModel>|<basicHttpBinding>|<wsHttpBinding>"),
            severity: Severity::High,
            category: PatternCategory::ApiDesign,
            name: "WCF Service (.NET)",
            description: "Windows Communication Foundation service detected",
            rationale: "WCF is legacy technology, not supported in .NET Core/5+",
            recommendation: "Migrate to ASP.NET Core Web API or gRPC",
            modernization_path: "Convert to ASP.NET Core REST API",
            suggested_target: None,
        },
        DetectionRule {
            pattern: rx(r"javax\.ejb\.|@Stateless|@Stateful|@MessageDriven"),
            severity: Severity::High,
            category: PatternCategory::Architecture,
            name: "Enterprise JavaBeans (EJB)",
            description: "EJB components detected",
            rationale: "EJBs are heavyweight, complex, and largely replaced by Spring Framework",
            recommendation: "Migrate to Spring Boot with dependency injection",
            modernization_path: "Refactor to Spring Boot microservices",
            suggested_target: None,
        },
        // ===== Frontend / UI patterns =====
        DetectionRule {
            pattern: rx(r"\$\(document\)\.ready|\$\(|jQuery\("),
            severity: Severity::Medium,
            category: PatternCategory::UiFramework,
            name: "jQuery DOM Manipulation",
            description: "jQuery library usage detected",
            rationale: "jQuery is outdated; modern frameworks provide better performance and maintainability",
            recommendation: "Migrate to React with hooks for declarative UI",
            modernization_path: "Convert to React components with useState/useEffect",
            suggested_target: Some(SuggestedTarget::GhostUi),
        },
        DetectionRule {
            pattern: rx(r#"class="[^"]*\b(col-xs|col-sm|col-md|col-lg|panel|panel-|jumbotron|well)"#),
            severity: Severity::Medium,
            category: PatternCategory::UiFramework,
            name: "Bootstrap 3.x Classes",
            description: "Bootstrap 3 CSS framework detected",
            rationale: "Bootstrap 3 is end-of-life (2019); lacks modern features and accessibility",
            recommendation: "Migrate to Tailwind CSS for utility-first styling",
            modernization_path: "Convert to Tailwind CSS with modern responsive design",
            suggested_target: Some(SuggestedTarget::GhostUi),
        },
        DetectionRule {
            pattern: rx(r"\.innerHTML\s*=|\.outerHTML\s*="),
            severity: Severity::High,
            category: PatternCategory::Security,
            name: "Direct innerHTML Manipulation",
            description: "Direct innerHTML assignment detected",
            rationale: "XSS vulnerability if user input is involved; bypasses framework security",
            recommendation: "Use React component rendering or sanitize with DOMPurify",
            modernization_path: "Refactor to React JSX or use safe DOM APIs",
            suggested_target: None,
        },
        DetectionRule {
            pattern: rx(r"document\.getElementById|document\.querySelector|document\.getElementsBy"),
            severity: Severity::Low,
            category: PatternCategory::Modernization,
            name: "Direct DOM Manipulation",
            description: "Direct DOM API usage detected",
            rationale: "Imperative DOM manipulation is error-prone and hard to maintain",
            recommendation: "Use React declarative rendering",
            modernization_path: "Convert to React component state",
            suggested_target: None,
        },
        // ===== Backend patterns =====
        DetectionRule {
            pattern: rx(r"org\.apache\.struts|com\.opensymphony\.xwork2"),
            severity: Severity::Critical,
            category: PatternCategory::Architecture,
            name: "Apache Struts Framework",
            description: "Apache Struts framework detected",
            rationale: "Struts has had multiple critical security vulnerabilities (CVE-2017-5638, etc.)",
            recommendation: "Migrate to Spring Boot or modern Java framework immediately",
            modernization_path: "Refactor to Spring Boot with Spring MVC",
            suggested_target: None,
        },
        DetectionRule {
            pattern: rx(r#"(?i)System\.Web\.UI\.Page|<%@\s*Page|<asp:|runat="server""#),
            severity: Severity::High,
            category: PatternCategory::Architecture,
            name: "ASP.NET WebForms",
            description: "ASP.NET WebForms detected",
            rationale: "WebForms is legacy technology with poor testability and performance",
            recommendation: "Migrate to ASP.NET Core MVC or Razor Pages",
            modernization_path: "Convert to ASP.NET Core with modern patterns",
            suggested_target: None,
        },
        DetectionRule {
            pattern: rx(r"new\s+SqlCommand\([^)]*\+|SqlCommand.*CommandText.*\+"),
            severity: Severity::Critical,
            category: PatternCategory::Security,
            name: "ADO.NET String Concatenation",
            description: "SQL commands built with string concatenation in .NET",
            rationale: "SQL injection vulnerability in ADO.NET code",
            recommendation: "Use parameterized SqlCommand with Parameters.AddWithValue",
            modernization_path: "Implement Entity Framework Core or Dapper with parameters",
            suggested_target: None,
        },
        // ===== JavaScript / Node.js patterns =====
        DetectionRule {
            pattern: rx(r"\bvar\s+\w+\s*="),
            severity: Severity::Low,
            category: PatternCategory::Modernization,
            name: "var Declarations",
            description: "Legacy var keyword detected",
            rationale: "var has function scope and hoisting issues; const/let are block-scoped",
            recommendation: "Replace with const (default) or let (when reassignment needed)",
            modernization_path: "Modernize to ES6+ const/let",
            suggested_target: None,
        },
        DetectionRule {
            pattern: rx(r"function\s*\([^)]*\)\s*\{[^}]*callback\s*\([^)]*\)\s*;[^}]*\}"),
            severity: Severity::Medium,
            category: PatternCategory::Modernization,
            name: "Callback Hell Pattern",
            description: "Nested callback pattern detected",
            rationale: "Callback pyramids are hard to read, debug, and maintain",
            recommendation: "Refactor to async/await or Promises",
            modernization_path: "Convert to async/await for better readability",
            suggested_target: None,
        },
        DetectionRule {
            pattern: rx(r"app\.get\(|app\.post\(|app\.put\(|app\.delete\("),
            severity: Severity::Low,
            category: PatternCategory::Architecture,
            name: "Express.js Monolithic Routes",
            description: "Express.js route definitions detected",
            rationale: "Monolithic Express apps can become unmaintainable at scale",
            recommendation: "Consider microservices architecture or modular route organization",
            modernization_path: "Refactor to modular Express routers or NestJS",
            suggested_target: None,
        },
        // ===== Python patterns =====
        DetectionRule {
            pattern: rx(r"from\s+django\.conf\.urls\s+import\s+url|django\.contrib\.admin"),
            severity: Severity::Low,
            category: PatternCategory::Architecture,
            name: "Django Monolithic App",
            description: "Django framework detected",
            rationale: "Large Django monoliths can benefit from service decomposition",
            recommendation: "Consider breaking into smaller services or using Django REST framework",
            modernization_path: "Modularize with Django apps or microservices",
            suggested_target: None,
        },
        // ===== Architecture smells =====
        DetectionRule {
            pattern: rx(r"function\s+\w+\s*\([^)]{50,}\)|def\s+\w+\s*\([^)]{50,}\)"),
            severity: Severity::Medium,
            category: PatternCategory::Architecture,
            name: "Long Parameter Lists",
            description: "Functions with excessive parameters detected",
            rationale: "Long parameter lists indicate poor abstraction and tight coupling",
            recommendation: "Refactor to use parameter objects or dependency injection",
            modernization_path: "Introduce DTOs or configuration objects",
            suggested_target: None,
        },
        DetectionRule {
            pattern: rx(r"(?s)class\s+\w+\s*\{.{2000,}\}"),
            severity: Severity::High,
            category: PatternCategory::Architecture,
            name: "God Class",
            description: "Extremely large class detected (>2000 characters)",
            rationale: "God classes violate single responsibility principle and are hard to maintain",
            recommendation: "Decompose into smaller, focused classes",
            modernization_path: "Apply SOLID principles and extract responsibilities",
            suggested_target: None,
        },
        DetectionRule {
            pattern: rx(r"(?s)function\s+\w+\s*\([^)]*\)\s*\{.{500,}\}"),
            severity: Severity::Medium,
            category: PatternCategory::Maintainability,
            name: "God Function",
            description: "Extremely long function detected (>500 characters)",
            rationale: "Long functions are hard to test, understand, and maintain",
            recommendation: "Extract smaller, single-purpose functions",
            modernization_path: "Refactor using Extract Method pattern",
            suggested_target: None,
        },
        // ===== Performance patterns =====
        DetectionRule {
            pattern: rx(r"(?i)SELECT\s+\*\s+FROM"),
            severity: Severity::Low,
            category: PatternCategory::Performance,
            name: "SELECT * Queries",
            description: "SELECT * queries detected",
            rationale: "Selecting all columns wastes bandwidth and memory",
            recommendation: "Specify only needed columns explicitly",
            modernization_path: "Use explicit column lists in queries",
            suggested_target: None,
        },
        DetectionRule {
            pattern: rx(r"for\s*\([^)]*\)\s*\{[^}]*\bawait\b"),
            severity: Severity::Medium,
            category: PatternCategory::Performance,
            name: "Await in Loop",
            description: "await inside loop detected",
            rationale: "Sequential awaits in loops cause poor performance",
            recommendation: "Use Promise.all() for parallel execution",
            modernization_path: "Refactor to Promise.all() or Promise.allSettled()",
            suggested_target: None,
        },
    ]
});
