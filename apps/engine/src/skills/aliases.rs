use std::collections::HashMap;
use std::sync::LazyLock;

/// Alias -> canonical key lookup, built once on first use and read-only
/// afterwards, so concurrent evaluations share it without synchronization.
///
/// Variants are listed in cleaned form: lower-case, punctuation other than
/// `.` `+` `#` collapsed to single spaces. `normalize` applies the same
/// cleaning before the lookup.
static ALIAS_TO_CANONICAL: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for (canonical, variants) in ALIAS_TABLE {
        map.insert(*canonical, *canonical);
        for variant in *variants {
            map.insert(*variant, *canonical);
        }
    }
    map
});

pub(crate) fn lookup(cleaned: &str) -> Option<&'static str> {
    ALIAS_TO_CANONICAL.get(cleaned).copied()
}

const ALIAS_TABLE: &[(&str, &[&str])] = &[
    // Languages
    (
        "javascript",
        &["js", "java script", "ecmascript", "es6", "es2015"],
    ),
    ("typescript", &["ts", "type script"]),
    ("python", &["python3", "python 3", "py"]),
    ("java", &["core java", "java se", "java 8"]),
    ("csharp", &["c#", "c sharp", ".net", "dotnet", "dot net"]),
    ("cplusplus", &["c++", "cpp", "c plus plus"]),
    ("golang", &["go", "go lang"]),
    ("rust", &["rust lang", "rustlang"]),
    ("php", &["php7", "php8"]),
    ("ruby", &["ruby lang"]),
    ("kotlin", &["kotlin jvm"]),
    ("swift", &["ios swift"]),
    ("scala", &["scala lang"]),
    ("sql", &["structured query language"]),
    ("bash", &["shell", "shell scripting", "bash scripting"]),
    // Frontend
    ("nodejs", &["node", "node.js", "node js"]),
    ("react", &["react.js", "reactjs", "react js"]),
    ("angular", &["angularjs", "angular.js", "angular 2"]),
    ("vue", &["vue.js", "vuejs", "vue js"]),
    ("nextjs", &["next.js", "next js"]),
    ("nuxt", &["nuxt.js", "nuxtjs"]),
    ("svelte", &["svelte.js", "sveltejs"]),
    ("jquery", &["jquery.js"]),
    ("html", &["html5"]),
    ("css", &["css3"]),
    ("sass", &["scss"]),
    ("tailwind", &["tailwindcss", "tailwind css"]),
    ("bootstrap", &["bootstrap 5"]),
    ("redux", &["redux.js"]),
    ("reactnative", &["react native", "rn"]),
    ("flutter", &["flutter framework"]),
    // Backend frameworks
    ("express", &["express.js", "expressjs", "express js"]),
    (
        "django",
        &["django framework", "django rest framework", "drf"],
    ),
    ("flask", &["python flask"]),
    ("fastapi", &["fast api"]),
    ("spring", &["spring boot", "springboot", "spring framework"]),
    ("laravel", &["php laravel"]),
    ("rails", &["ruby on rails", "ror"]),
    ("graphql", &["graph ql"]),
    ("rest", &["rest api", "rest apis", "restful", "restful api"]),
    ("grpc", &["g rpc"]),
    ("microservices", &["micro services", "microservice"]),
    // Databases
    ("postgresql", &["postgres", "postgre sql", "psql"]),
    ("mysql", &["my sql", "mariadb"]),
    ("mongodb", &["mongo", "mongo db"]),
    ("redis", &["redis cache"]),
    ("sqlite", &["sqlite3"]),
    ("mssql", &["sql server", "ms sql", "microsoft sql server"]),
    ("oracle", &["oracle db", "oracle database", "pl sql"]),
    ("elasticsearch", &["elastic search"]),
    ("cassandra", &["apache cassandra"]),
    ("dynamodb", &["dynamo db"]),
    // Cloud and DevOps
    ("aws", &["amazon web services", "aws cloud"]),
    ("azure", &["microsoft azure", "ms azure"]),
    ("gcp", &["google cloud", "google cloud platform"]),
    ("docker", &["docker container", "containerization"]),
    ("kubernetes", &["k8s", "kube"]),
    ("terraform", &["infrastructure as code", "iac"]),
    ("jenkins", &["jenkins ci"]),
    (
        "cicd",
        &[
            "ci cd",
            "ci cd pipelines",
            "continuous integration",
            "continuous delivery",
        ],
    ),
    ("git", &["github", "gitlab", "version control"]),
    ("linux", &["gnu linux", "unix"]),
    ("kafka", &["apache kafka"]),
    ("rabbitmq", &["rabbit mq"]),
    // Data and ML
    ("machine learning", &["ml", "machinelearning"]),
    ("deep learning", &["dl", "deeplearning", "neural networks"]),
    ("data science", &["datascience"]),
    ("data analysis", &["data analytics"]),
    ("nlp", &["natural language processing"]),
    ("tensorflow", &["tensor flow", "tf"]),
    ("pytorch", &["torch", "py torch"]),
    ("scikit learn", &["sklearn", "scikitlearn"]),
    ("pandas", &["python pandas"]),
    ("spark", &["apache spark", "pyspark"]),
    ("hadoop", &["apache hadoop"]),
    ("airflow", &["apache airflow"]),
    ("powerbi", &["power bi"]),
    ("excel", &["ms excel", "microsoft excel", "advanced excel"]),
    // QA and testing
    ("selenium", &["selenium webdriver"]),
    ("cypress", &["cypress.io"]),
    ("jest", &["jest testing"]),
    ("junit", &["junit5", "junit 5"]),
    ("pytest", &["py test"]),
    ("testng", &["test ng"]),
    ("api testing", &["api test automation"]),
    // Business and non-technical
    ("project management", &["pm", "program management"]),
    ("agile", &["agile methodology", "agile methodologies"]),
    ("scrum", &["scrum master"]),
    ("jira", &["atlassian jira"]),
    ("communication", &["communication skills", "verbal communication"]),
    ("leadership", &["team leadership", "people management"]),
    ("business analysis", &["business analyst"]),
    ("sales", &["b2b sales"]),
    ("marketing", &["digital marketing"]),
    ("seo", &["search engine optimization"]),
    ("salesforce", &["salesforce crm", "sfdc"]),
];
