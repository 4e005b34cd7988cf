use super::{ActionKindText, DocumentText, FieldText, FormSection, FormText, LocaleCatalog};
use crate::domain::locale::Locale;

pub(super) static ZH: LocaleCatalog = LocaleCatalog {
    locale: Locale::Zh,
    display_name: "中文",
    title: "結構化提示詞生成器",
    subtitle: "基於標準化架構的提示詞生成器",
    sections: ["角色", "任務", "行動", "背景", "輸出"],
    fields: [
        FieldText {
            title: "領域",
            token: "{領域}",
            hint: "例如：數位行銷、機器學習、財務規劃、軟體開發...",
            help: "定義主要專業領域",
            section: FormSection::Role,
        },
        FieldText {
            title: "專精項目",
            token: "{專精項目}",
            hint: "例如：品牌策略與社群媒體、深度學習與 NLP、投資分析...",
            help: "定義具體專精項目",
            section: FormSection::Role,
        },
        FieldText {
            title: "具體目標",
            token: "{具體目標}",
            hint: "例如：為新創科技公司制定完整社群行銷策略...",
            help: "明確描述具體目標",
            section: FormSection::Task,
        },
        FieldText {
            title: "背景細節",
            token: "{背景細節}",
            hint: "例如：目標族群：25-35 歲年輕專業人士、預算：每月五萬美金...",
            help: "提供背景資訊和重要細節",
            section: FormSection::Context,
        },
        FieldText {
            title: "限制條件",
            token: "{限制條件}",
            hint: "例如：必須符合一般資料保護規則的規範、無付費廣告預算...",
            help: "說明限制條件和約束",
            section: FormSection::Context,
        },
        FieldText {
            title: "輸出格式",
            token: "{輸出格式}",
            hint: "例如：markdown、JSON、PDF 報告、Excel 試算表...",
            help: "指定輸出檔案格式",
            section: FormSection::Output,
        },
        FieldText {
            title: "結構",
            token: "{結構}",
            hint: "例如：{title, executive_summary, analysis, recommendations, timeline}...",
            help: "定義輸出結構",
            section: FormSection::Output,
        },
        FieldText {
            title: "避免結果",
            token: "{避免結果}",
            hint: "例如：僅給出泛泛建議、包含未經查證的說法、超過 2000 字...",
            help: "明確不希望出現的結果",
            section: FormSection::Output,
        },
    ],
    action_field: FieldText {
        title: "行動",
        token: "{行動}",
        hint: "例如：社群趨勢市場調查、顧客分群分析、競品分析...",
        help: "定義需要執行的具體行動",
        section: FormSection::Action,
    },
    action_kinds: [
        ActionKindText {
            label: "搜尋",
            input_label: "查詢內容",
            hint: "例如：最新 AI 新聞、市場趨勢...",
            help: "用於即時網路搜尋。",
        },
        ActionKindText {
            label: "查找",
            input_label: "主題",
            hint: "例如：LLM 理論、Python 語法...",
            help: "查找特定主題的知識文獻。",
        },
        ActionKindText {
            label: "瀏覽",
            input_label: "網址",
            hint: "例如：https://arxiv.org/abs/2307...、https://news.ycombinator.com/...",
            help: "瀏覽特定網頁以取得資料。",
        },
    ],
    document: DocumentText {
        role_header: "# <角色>",
        task_header: "# <任務>",
        context_header: "# <背景>",
        reasoning_header: "## 推理",
        action_header: "## 行動",
        observation_header: "## 觀察",
        output_header: "# <輸出格式>",
        role_sentence: "你是 {domain} 的專家，專精於 {specialization}。",
        task_sentence: "你的任務是 {specificGoal}。",
        context_intro: "你需要的背景資訊：",
        reasoning_line: "讓我們一步一步思考。",
        observation_line: "根據行動結果產生輸出。",
        output_structured: "請以 {format} 格式，並依照下列結構：{structure}",
        output_free: "請以 {format} 格式輸出，結構不限。",
        avoid_line: "請避免 {unwantedResult}",
    },
    form: FormText {
        structure_question: "指定輸出結構？",
        action_kind_question: "行動類型",
        add_action_question: "新增另一個行動？",
    },
};
