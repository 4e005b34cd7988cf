use super::{ActionKindText, DocumentText, FieldText, FormSection, FormText, LocaleCatalog};
use crate::domain::locale::Locale;

pub(super) static EN: LocaleCatalog = LocaleCatalog {
    locale: Locale::En,
    display_name: "English",
    title: "Structured Prompt Generator",
    subtitle: "A standardized prompt generator.",
    sections: ["Role", "Task", "Action", "Context", "Output"],
    fields: [
        FieldText {
            title: "Domain",
            token: "{domain}",
            hint: "e.g. digital marketing, machine learning, financial planning, software development...",
            help: "Define the main professional domain.",
            section: FormSection::Role,
        },
        FieldText {
            title: "Specialization",
            token: "{specialization}",
            hint: "e.g. brand strategy and social media, deep learning and NLP, investment analysis...",
            help: "Define the specific area of expertise.",
            section: FormSection::Role,
        },
        FieldText {
            title: "Specific Goal",
            token: "{specific goal}",
            hint: "e.g. create a social media marketing strategy for a tech startup...",
            help: "Describe the concrete goal clearly.",
            section: FormSection::Task,
        },
        FieldText {
            title: "Context Details",
            token: "{details}",
            hint: "e.g. Target audience: young professionals aged 25-35, Budget: $50k monthly...",
            help: "Provide background info and key details.",
            section: FormSection::Context,
        },
        FieldText {
            title: "Constraints",
            token: "{constraints}",
            hint: "e.g. Must comply with GDPR regulations, No budget for paid advertising...",
            help: "Specify constraints and requirements.",
            section: FormSection::Context,
        },
        FieldText {
            title: "Output Format",
            token: "{format}",
            hint: "e.g. markdown, JSON, PDF report, Excel spreadsheet...",
            help: "Specify output file format.",
            section: FormSection::Output,
        },
        FieldText {
            title: "Structure",
            token: "{structure}",
            hint: "e.g. {title, executive_summary, analysis, recommendations, timeline}...",
            help: "Define output structure.",
            section: FormSection::Output,
        },
        FieldText {
            title: "Unwanted Result",
            token: "{unwanted result}",
            hint: "e.g. provide generic advice without specific data, exceed 2000 words...",
            help: "Clearly state unwanted results.",
            section: FormSection::Output,
        },
    ],
    action_field: FieldText {
        title: "Action",
        token: "{action}",
        hint: "e.g. market research for social media trends, competitive analysis...",
        help: "Define the specific action required.",
        section: FormSection::Action,
    },
    action_kinds: [
        ActionKindText {
            label: "Search",
            input_label: "Query",
            hint: "e.g. latest AI news, market trend, ...",
            help: "Used for real-time web search.",
        },
        ActionKindText {
            label: "Lookup",
            input_label: "Topic",
            hint: "e.g. LLM theory, Python syntax, ...",
            help: "Look up knowledge or literature about a specific topic.",
        },
        ActionKindText {
            label: "Browse",
            input_label: "URL",
            hint: "e.g. https://arxiv.org/abs/2307..., https://news.ycombinator.com/...",
            help: "Browse a specific web page to gather information.",
        },
    ],
    document: DocumentText {
        role_header: "# <Role>",
        task_header: "# <Task>",
        context_header: "# <Context>",
        reasoning_header: "## Reasoning",
        action_header: "## Action",
        observation_header: "## Observation",
        output_header: "# <Output Format>",
        role_sentence: "You are an expert in {domain} with specialization in {specialization}.",
        task_sentence: "Your task is to {specificGoal}.",
        context_intro: "Here is the context you need:",
        reasoning_line: "Let's think step by step.",
        observation_line: "Based on the action result to generate output.",
        output_structured: "Return a {format} file with the following structure: {structure}",
        output_free: "Return a {format} file; the structure is free.",
        avoid_line: "Don't {unwantedResult}",
    },
    form: FormText {
        structure_question: "Specify output structure?",
        action_kind_question: "Action type",
        add_action_question: "Add another action?",
    },
};
