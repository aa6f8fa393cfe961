use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use super::domain::{Difficulty, Question, QuestionKind, QuestionTemplate, Role};

/// Upper bound on questions drawn into a single practice session.
pub const SESSION_QUESTION_COUNT: usize = 5;

/// Read-only question pools keyed by role and difficulty.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    pools: HashMap<(Role, Difficulty), Vec<Question>>,
}

impl QuestionBank {
    /// The built-in fixture table; every role/difficulty pair resolves to a non-empty pool.
    pub fn standard() -> Self {
        let pools = Role::ordered()
            .into_iter()
            .flat_map(|role| {
                Difficulty::ordered().into_iter().map(move |difficulty| {
                    let questions = standard_templates(role, difficulty)
                        .iter()
                        .map(|template| template.instantiate(difficulty))
                        .collect();
                    ((role, difficulty), questions)
                })
            })
            .collect();

        Self { pools }
    }

    pub fn from_pools<I>(pools: I) -> Self
    where
        I: IntoIterator<Item = ((Role, Difficulty), Vec<Question>)>,
    {
        Self {
            pools: pools.into_iter().collect(),
        }
    }

    /// Fixture list for the pair, in table order. Pairs without a pool yield an empty slice.
    pub fn questions(&self, role: Role, difficulty: Difficulty) -> &[Question] {
        self.pools
            .get(&(role, difficulty))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Shuffle the pool and keep the first `min(SESSION_QUESTION_COUNT, len)` questions.
    pub fn draw_session<R>(&self, role: Role, difficulty: Difficulty, rng: &mut R) -> Vec<Question>
    where
        R: Rng + ?Sized,
    {
        let mut pool = self.questions(role, difficulty).to_vec();
        pool.shuffle(rng);
        pool.truncate(SESSION_QUESTION_COUNT);
        pool
    }

    pub fn find(&self, question_id: &str) -> Option<&Question> {
        self.pools
            .values()
            .flat_map(|questions| questions.iter())
            .find(|question| question.id == question_id)
    }

    /// Roles and difficulties with display labels, for the setup screen.
    pub fn catalog(&self) -> PracticeCatalog {
        let roles = Role::ordered()
            .into_iter()
            .map(|role| RoleCatalogEntry {
                role,
                label: role.label(),
                description: role.description(),
                question_count: Difficulty::ordered()
                    .into_iter()
                    .map(|difficulty| self.questions(role, difficulty).len())
                    .sum(),
            })
            .collect();

        let difficulties = Difficulty::ordered()
            .into_iter()
            .map(|difficulty| DifficultyCatalogEntry {
                difficulty,
                label: difficulty.label(),
            })
            .collect();

        PracticeCatalog {
            roles,
            difficulties,
        }
    }

    pub fn len(&self) -> usize {
        self.pools.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PracticeCatalog {
    pub roles: Vec<RoleCatalogEntry>,
    pub difficulties: Vec<DifficultyCatalogEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleCatalogEntry {
    pub role: Role,
    pub label: &'static str,
    pub description: &'static str,
    pub question_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DifficultyCatalogEntry {
    pub difficulty: Difficulty,
    pub label: &'static str,
}

fn standard_templates(role: Role, difficulty: Difficulty) -> &'static [QuestionTemplate] {
    match (role, difficulty) {
        (Role::Frontend, Difficulty::Junior) => FRONTEND_JUNIOR,
        (Role::Frontend, Difficulty::MidLevel) => FRONTEND_MID_LEVEL,
        (Role::Frontend, Difficulty::Senior) => FRONTEND_SENIOR,
        (Role::Backend, Difficulty::Junior) => BACKEND_JUNIOR,
        (Role::Backend, Difficulty::MidLevel) => BACKEND_MID_LEVEL,
        (Role::Backend, Difficulty::Senior) => BACKEND_SENIOR,
        (Role::Fullstack, Difficulty::Junior) => FULLSTACK_JUNIOR,
        (Role::Fullstack, Difficulty::MidLevel) => FULLSTACK_MID_LEVEL,
        (Role::Fullstack, Difficulty::Senior) => FULLSTACK_SENIOR,
        (Role::DataScience, Difficulty::Junior) => DATA_SCIENCE_JUNIOR,
        (Role::DataScience, Difficulty::MidLevel) => DATA_SCIENCE_MID_LEVEL,
        (Role::DataScience, Difficulty::Senior) => DATA_SCIENCE_SENIOR,
        (Role::ProductManager, Difficulty::Junior) => PRODUCT_MANAGER_JUNIOR,
        (Role::ProductManager, Difficulty::MidLevel) => PRODUCT_MANAGER_MID_LEVEL,
        (Role::ProductManager, Difficulty::Senior) => PRODUCT_MANAGER_SENIOR,
        (Role::Devops, Difficulty::Junior) => DEVOPS_JUNIOR,
        (Role::Devops, Difficulty::MidLevel) => DEVOPS_MID_LEVEL,
        (Role::Devops, Difficulty::Senior) => DEVOPS_SENIOR,
    }
}

const FRONTEND_JUNIOR: &[QuestionTemplate] = &[
    QuestionTemplate {
        id: "fe-jr-1",
        prompt: "What is the difference between let, const, and var in JavaScript?",
        kind: QuestionKind::Technical,
        category: "JavaScript Fundamentals",
        expected_keywords: &[
            "scope", "hoisting", "block scope", "function scope", "reassignment", "immutable",
        ],
        sample_answer: Some(
            "var has function scope and is hoisted, let has block scope and is not hoisted, const has block scope and cannot be reassigned.",
        ),
    },
    QuestionTemplate {
        id: "fe-jr-2",
        prompt: "Explain the difference between == and === in JavaScript.",
        kind: QuestionKind::Technical,
        category: "JavaScript Fundamentals",
        expected_keywords: &[
            "strict equality", "type coercion", "comparison", "type conversion", "triple equals",
        ],
        sample_answer: Some(
            "== performs type coercion before comparison, while === compares both value and type without conversion.",
        ),
    },
    QuestionTemplate {
        id: "fe-jr-3",
        prompt: "What is the box model in CSS?",
        kind: QuestionKind::Technical,
        category: "CSS Fundamentals",
        expected_keywords: &[
            "content", "padding", "border", "margin", "box-sizing", "width", "height",
        ],
        sample_answer: Some(
            "The box model consists of content, padding, border, and margin. It determines how elements are sized and spaced.",
        ),
    },
    QuestionTemplate {
        id: "fe-jr-4",
        prompt: "How do you center a div horizontally and vertically?",
        kind: QuestionKind::Technical,
        category: "CSS Layout",
        expected_keywords: &[
            "flexbox", "grid", "justify-content", "align-items", "center", "margin auto",
        ],
        sample_answer: Some(
            "You can use flexbox with justify-content: center and align-items: center, or CSS Grid with place-items: center.",
        ),
    },
    QuestionTemplate {
        id: "fe-jr-5",
        prompt: "What are the different data types in JavaScript?",
        kind: QuestionKind::Technical,
        category: "JavaScript Fundamentals",
        expected_keywords: &[
            "primitive", "object", "string", "number", "boolean", "undefined", "null", "symbol",
            "bigint",
        ],
        sample_answer: Some(
            "JavaScript has primitive types (string, number, boolean, undefined, null, symbol, bigint) and object types.",
        ),
    },
    QuestionTemplate {
        id: "fe-jr-6",
        prompt: "Why did you choose frontend development as your career path?",
        kind: QuestionKind::Behavioral,
        category: "Career Motivation",
        expected_keywords: &[
            "user experience", "visual", "creative", "interactive", "problem solving", "learning",
        ],
        sample_answer: Some(
            "I enjoy creating user interfaces and seeing immediate visual results of my code, plus the creative aspect of frontend development.",
        ),
    },
];

const FRONTEND_MID_LEVEL: &[QuestionTemplate] = &[
    QuestionTemplate {
        id: "fe-mid-1",
        prompt: "Explain the concept of closures in JavaScript with an example.",
        kind: QuestionKind::Technical,
        category: "JavaScript Advanced",
        expected_keywords: &[
            "closure", "lexical scope", "inner function", "outer function", "encapsulation",
            "private variables",
        ],
        sample_answer: Some(
            "A closure is when an inner function has access to variables from its outer function even after the outer function has returned.",
        ),
    },
    QuestionTemplate {
        id: "fe-mid-2",
        prompt: "What is the Virtual DOM and how does it work in React?",
        kind: QuestionKind::Technical,
        category: "React",
        expected_keywords: &[
            "virtual dom", "reconciliation", "diffing", "performance", "react", "real dom",
            "rendering",
        ],
        sample_answer: Some(
            "Virtual DOM is a JavaScript representation of the real DOM. React uses it to efficiently update the UI by comparing changes and updating only what changed.",
        ),
    },
    QuestionTemplate {
        id: "fe-mid-3",
        prompt: "Explain the difference between CSS Grid and Flexbox.",
        kind: QuestionKind::Technical,
        category: "CSS Layout",
        expected_keywords: &[
            "grid", "flexbox", "2d", "1d", "layout", "container", "items", "axis",
        ],
        sample_answer: Some(
            "CSS Grid is for 2D layouts (rows and columns), while Flexbox is for 1D layouts (either row or column). Grid is better for complex layouts.",
        ),
    },
    QuestionTemplate {
        id: "fe-mid-4",
        prompt: "How do you optimize website performance?",
        kind: QuestionKind::Technical,
        category: "Performance",
        expected_keywords: &[
            "optimization", "minification", "compression", "caching", "lazy loading", "bundling",
            "cdn",
        ],
        sample_answer: Some(
            "Through code splitting, lazy loading, image optimization, minification, compression, caching, and using CDNs.",
        ),
    },
    QuestionTemplate {
        id: "fe-mid-5",
        prompt: "Describe a challenging bug you encountered and how you solved it.",
        kind: QuestionKind::Behavioral,
        category: "Problem Solving",
        expected_keywords: &[
            "debugging", "problem solving", "tools", "systematic", "root cause", "solution",
        ],
        sample_answer: Some(
            "I had a memory leak in a React app. I used dev tools to identify the issue, found event listeners not being cleaned up, and fixed it with proper cleanup in useEffect.",
        ),
    },
];

const FRONTEND_SENIOR: &[QuestionTemplate] = &[
    QuestionTemplate {
        id: "fe-sr-1",
        prompt: "Design a scalable architecture for a large-scale React application.",
        kind: QuestionKind::SystemDesign,
        category: "Architecture",
        expected_keywords: &[
            "microservices", "micro-frontends", "state management", "routing", "bundling",
            "testing", "ci/cd",
        ],
        sample_answer: Some(
            "I would use micro-frontends with module federation, implement proper state management, set up comprehensive testing, and establish CI/CD pipelines.",
        ),
    },
    QuestionTemplate {
        id: "fe-sr-2",
        prompt: "How would you implement a custom hook for data fetching with caching?",
        kind: QuestionKind::Technical,
        category: "React Advanced",
        expected_keywords: &[
            "custom hook", "caching", "useEffect", "useState", "useMemo", "useCallback",
            "stale-while-revalidate",
        ],
        sample_answer: Some(
            "I would create a custom hook using useState for data state, useEffect for fetching, and implement caching with Map or localStorage.",
        ),
    },
    QuestionTemplate {
        id: "fe-sr-3",
        prompt: "Explain your approach to leading a frontend team and mentoring junior developers.",
        kind: QuestionKind::Behavioral,
        category: "Leadership",
        expected_keywords: &[
            "leadership", "mentoring", "code review", "best practices", "team collaboration",
            "knowledge sharing",
        ],
        sample_answer: Some(
            "I focus on code reviews, pair programming, establishing coding standards, and creating a collaborative learning environment.",
        ),
    },
    QuestionTemplate {
        id: "fe-sr-4",
        prompt: "How do you ensure accessibility in your applications?",
        kind: QuestionKind::Technical,
        category: "Accessibility",
        expected_keywords: &[
            "accessibility", "a11y", "wcag", "screen readers", "keyboard navigation", "aria",
            "semantic html",
        ],
        sample_answer: Some(
            "I use semantic HTML, ARIA attributes, ensure keyboard navigation, test with screen readers, and follow WCAG guidelines.",
        ),
    },
];

const BACKEND_JUNIOR: &[QuestionTemplate] = &[
    QuestionTemplate {
        id: "be-jr-1",
        prompt: "What is the difference between SQL and NoSQL databases?",
        kind: QuestionKind::Technical,
        category: "Database",
        expected_keywords: &[
            "sql", "nosql", "relational", "document", "acid", "schema", "scalability",
        ],
        sample_answer: Some(
            "SQL databases are relational with fixed schemas, while NoSQL databases are non-relational with flexible schemas.",
        ),
    },
    QuestionTemplate {
        id: "be-jr-2",
        prompt: "Explain what REST API is and its principles.",
        kind: QuestionKind::Technical,
        category: "API Design",
        expected_keywords: &[
            "rest", "api", "http", "stateless", "crud", "resources", "endpoints",
        ],
        sample_answer: Some(
            "REST is an architectural style for APIs that uses HTTP methods, is stateless, and treats everything as resources.",
        ),
    },
    QuestionTemplate {
        id: "be-jr-3",
        prompt: "What are HTTP status codes and give examples?",
        kind: QuestionKind::Technical,
        category: "HTTP",
        expected_keywords: &[
            "status codes", "200", "404", "500", "201", "400", "401", "403",
        ],
        sample_answer: Some(
            "200 (OK), 201 (Created), 400 (Bad Request), 401 (Unauthorized), 404 (Not Found), 500 (Internal Server Error).",
        ),
    },
];

const BACKEND_MID_LEVEL: &[QuestionTemplate] = &[
    QuestionTemplate {
        id: "be-mid-1",
        prompt: "Explain database indexing and its impact on performance.",
        kind: QuestionKind::Technical,
        category: "Database",
        expected_keywords: &[
            "indexing", "performance", "query optimization", "b-tree", "clustered", "non-clustered",
        ],
        sample_answer: Some(
            "Database indexes improve query performance by creating shortcuts to data, but they slow down writes and consume storage.",
        ),
    },
    QuestionTemplate {
        id: "be-mid-2",
        prompt: "How do you handle authentication and authorization in APIs?",
        kind: QuestionKind::Technical,
        category: "Security",
        expected_keywords: &[
            "authentication", "authorization", "jwt", "oauth", "rbac", "session", "token",
        ],
        sample_answer: Some(
            "I use JWT tokens for authentication, implement role-based access control for authorization, and secure endpoints with middleware.",
        ),
    },
];

const BACKEND_SENIOR: &[QuestionTemplate] = &[
    QuestionTemplate {
        id: "be-sr-1",
        prompt: "Design a scalable microservices architecture for an e-commerce platform.",
        kind: QuestionKind::SystemDesign,
        category: "Architecture",
        expected_keywords: &[
            "microservices", "scalability", "load balancing", "database sharding", "message queues",
            "caching",
        ],
        sample_answer: Some(
            "I would separate services by domain (user, product, order), implement API gateways, use message queues for communication, and implement caching strategies.",
        ),
    },
];

const FULLSTACK_JUNIOR: &[QuestionTemplate] = &[
    QuestionTemplate {
        id: "fs-jr-1",
        prompt: "How do you connect a frontend application to a backend API?",
        kind: QuestionKind::Technical,
        category: "Integration",
        expected_keywords: &[
            "api", "fetch", "axios", "http", "cors", "endpoints", "json",
        ],
        sample_answer: Some(
            "I use fetch or axios to make HTTP requests to backend endpoints, handle CORS, and parse JSON responses.",
        ),
    },
];

const FULLSTACK_MID_LEVEL: &[QuestionTemplate] = &[
    QuestionTemplate {
        id: "fs-mid-1",
        prompt: "Describe the full lifecycle of a web request from frontend to database.",
        kind: QuestionKind::Technical,
        category: "Full Stack",
        expected_keywords: &[
            "http request", "routing", "middleware", "controller", "database", "response", "orm",
        ],
        sample_answer: Some(
            "Frontend sends HTTP request → Backend routes to controller → Controller processes request → Database query via ORM → Response sent back to frontend.",
        ),
    },
];

const FULLSTACK_SENIOR: &[QuestionTemplate] = &[
    QuestionTemplate {
        id: "fs-sr-1",
        prompt: "How would you architect a real-time chat application?",
        kind: QuestionKind::SystemDesign,
        category: "Real-time Systems",
        expected_keywords: &[
            "websockets", "socket.io", "real-time", "message queues", "scaling", "database",
            "redis",
        ],
        sample_answer: Some(
            "I would use WebSockets for real-time communication, implement message queues for scalability, use Redis for caching, and design a scalable database schema.",
        ),
    },
];

const DATA_SCIENCE_JUNIOR: &[QuestionTemplate] = &[
    QuestionTemplate {
        id: "ds-jr-1",
        prompt: "What is the difference between supervised and unsupervised learning?",
        kind: QuestionKind::Technical,
        category: "Machine Learning",
        expected_keywords: &[
            "supervised", "unsupervised", "labeled data", "clustering", "classification",
            "regression",
        ],
        sample_answer: Some(
            "Supervised learning uses labeled data to train models, while unsupervised learning finds patterns in unlabeled data.",
        ),
    },
];

const DATA_SCIENCE_MID_LEVEL: &[QuestionTemplate] = &[
    QuestionTemplate {
        id: "ds-mid-1",
        prompt: "Explain the bias-variance tradeoff in machine learning.",
        kind: QuestionKind::Technical,
        category: "Machine Learning",
        expected_keywords: &[
            "bias", "variance", "overfitting", "underfitting", "model complexity", "generalization",
        ],
        sample_answer: Some(
            "Bias is error from oversimplifying assumptions, variance is error from sensitivity to small fluctuations. High bias leads to underfitting, high variance to overfitting.",
        ),
    },
];

const DATA_SCIENCE_SENIOR: &[QuestionTemplate] = &[
    QuestionTemplate {
        id: "ds-sr-1",
        prompt: "How would you design a recommendation system for a streaming platform?",
        kind: QuestionKind::SystemDesign,
        category: "Recommendation Systems",
        expected_keywords: &[
            "collaborative filtering", "content-based", "hybrid", "matrix factorization",
            "deep learning", "scalability",
        ],
        sample_answer: Some(
            "I would use a hybrid approach combining collaborative filtering and content-based methods, implement matrix factorization, and use deep learning for complex patterns.",
        ),
    },
];

const PRODUCT_MANAGER_JUNIOR: &[QuestionTemplate] = &[
    QuestionTemplate {
        id: "pm-jr-1",
        prompt: "How do you prioritize features in a product backlog?",
        kind: QuestionKind::Behavioral,
        category: "Product Management",
        expected_keywords: &[
            "prioritization", "user value", "business impact", "effort", "roadmap", "stakeholders",
        ],
        sample_answer: Some(
            "I prioritize based on user value, business impact, and development effort using frameworks like MoSCoW or RICE.",
        ),
    },
];

const PRODUCT_MANAGER_MID_LEVEL: &[QuestionTemplate] = &[
    QuestionTemplate {
        id: "pm-mid-1",
        prompt: "Describe your process for conducting user research and gathering requirements.",
        kind: QuestionKind::Behavioral,
        category: "User Research",
        expected_keywords: &[
            "user research", "interviews", "surveys", "personas", "user stories", "requirements",
        ],
        sample_answer: Some(
            "I conduct user interviews, create surveys, develop personas, and translate insights into user stories and requirements.",
        ),
    },
];

const PRODUCT_MANAGER_SENIOR: &[QuestionTemplate] = &[
    QuestionTemplate {
        id: "pm-sr-1",
        prompt: "How would you launch a new product in a competitive market?",
        kind: QuestionKind::Behavioral,
        category: "Product Strategy",
        expected_keywords: &[
            "go-to-market", "competitive analysis", "positioning", "pricing", "marketing",
            "metrics",
        ],
        sample_answer: Some(
            "I would develop a go-to-market strategy, conduct competitive analysis, define positioning, set pricing, and establish success metrics.",
        ),
    },
];

const DEVOPS_JUNIOR: &[QuestionTemplate] = &[
    QuestionTemplate {
        id: "do-jr-1",
        prompt: "What is the difference between continuous integration and continuous deployment?",
        kind: QuestionKind::Technical,
        category: "CI/CD",
        expected_keywords: &[
            "ci", "cd", "automation", "testing", "deployment", "pipeline", "integration",
        ],
        sample_answer: Some(
            "CI automatically integrates code changes and runs tests, while CD automatically deploys tested code to production.",
        ),
    },
];

const DEVOPS_MID_LEVEL: &[QuestionTemplate] = &[
    QuestionTemplate {
        id: "do-mid-1",
        prompt: "Explain containerization and its benefits using Docker.",
        kind: QuestionKind::Technical,
        category: "Containerization",
        expected_keywords: &[
            "docker", "containers", "isolation", "portability", "microservices", "orchestration",
        ],
        sample_answer: Some(
            "Containerization packages applications with their dependencies into portable containers, providing isolation and consistency across environments.",
        ),
    },
];

const DEVOPS_SENIOR: &[QuestionTemplate] = &[
    QuestionTemplate {
        id: "do-sr-1",
        prompt: "How would you design a highly available and scalable infrastructure?",
        kind: QuestionKind::SystemDesign,
        category: "Infrastructure",
        expected_keywords: &[
            "high availability", "scalability", "load balancing", "redundancy", "monitoring",
            "auto-scaling",
        ],
        sample_answer: Some(
            "I would implement load balancing, redundancy across multiple zones, auto-scaling, comprehensive monitoring, and disaster recovery procedures.",
        ),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn every_role_and_difficulty_has_questions() {
        let bank = QuestionBank::standard();
        for role in Role::ordered() {
            for difficulty in Difficulty::ordered() {
                let questions = bank.questions(role, difficulty);
                assert!(!questions.is_empty(), "{role}/{difficulty} pool is empty");
                assert!(questions
                    .iter()
                    .all(|question| question.difficulty == difficulty));
            }
        }
        assert_eq!(bank.len(), 33);
    }

    #[test]
    fn question_ids_are_unique() {
        let bank = QuestionBank::standard();
        let mut seen = HashSet::new();
        for role in Role::ordered() {
            for difficulty in Difficulty::ordered() {
                for question in bank.questions(role, difficulty) {
                    assert!(seen.insert(question.id.clone()), "duplicate {}", question.id);
                }
            }
        }
    }

    #[test]
    fn draw_session_caps_at_five_without_replacement() {
        let bank = QuestionBank::standard();
        let mut rng = StdRng::seed_from_u64(7);

        let drawn = bank.draw_session(Role::Frontend, Difficulty::Junior, &mut rng);
        assert_eq!(drawn.len(), SESSION_QUESTION_COUNT);
        let ids: HashSet<_> = drawn.iter().map(|question| question.id.as_str()).collect();
        assert_eq!(ids.len(), drawn.len());
        assert!(drawn.iter().all(|question| question.id.starts_with("fe-jr-")));
    }

    #[test]
    fn draw_session_takes_whole_pool_when_small() {
        let bank = QuestionBank::standard();
        let mut rng = StdRng::seed_from_u64(11);

        let drawn = bank.draw_session(Role::Backend, Difficulty::Junior, &mut rng);
        let mut ids: Vec<_> = drawn.iter().map(|question| question.id.clone()).collect();
        ids.sort();
        assert_eq!(ids, vec!["be-jr-1", "be-jr-2", "be-jr-3"]);
    }

    #[test]
    fn missing_pool_is_empty_not_a_panic() {
        let bank = QuestionBank::from_pools(Vec::new());
        let mut rng = StdRng::seed_from_u64(1);
        assert!(bank.questions(Role::Devops, Difficulty::Senior).is_empty());
        assert!(bank
            .draw_session(Role::Devops, Difficulty::Senior, &mut rng)
            .is_empty());
        assert!(bank.is_empty());
    }

    #[test]
    fn catalog_lists_every_role_with_counts() {
        let catalog = QuestionBank::standard().catalog();
        assert_eq!(catalog.roles.len(), 6);
        assert_eq!(catalog.difficulties.len(), 3);
        let frontend = &catalog.roles[0];
        assert_eq!(frontend.role, Role::Frontend);
        assert_eq!(frontend.question_count, 15);
    }

    #[test]
    fn find_locates_questions_by_id() {
        let bank = QuestionBank::standard();
        let question = bank.find("do-sr-1").expect("devops senior question");
        assert_eq!(question.kind, QuestionKind::SystemDesign);
        assert!(bank.find("zz-1").is_none());
    }
}
