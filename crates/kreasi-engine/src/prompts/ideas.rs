//! Prompt builder for the idea batch feature.

use kreasi_models::{IdeaRequest, ProductionEffort, Schema};

use super::PromptSpec;

const SYSTEM_INSTRUCTION: &str = "Anda adalah seorang ahli strategi konten yang menghasilkan ide konten yang spesifik untuk industri dan audiens tertentu.
Jangan pernah mengeluarkan topik generik. Setiap ide harus secara eksplisit terhubung dengan konteks industri + sub-niche + audiens yang dipilih, sesuai dengan format yang dipilih, dan dapat dieksekusi dalam batasan yang ada.
Kembalikan JSON valid yang ketat sesuai dengan skema output. Tanpa markdown, tanpa teks tambahan.";

/// Expected shape of an idea batch response.
pub fn response_schema() -> Schema {
    // Ids are minted during normalization, so the schema never asks for one.
    let idea = Schema::object(
        vec![
            ("hooks", Schema::array(Schema::string())),
            ("summary", Schema::string()),
            ("unique_angle", Schema::string()),
            ("outline", Schema::array(Schema::string())),
            ("cta", Schema::string()),
            ("keywords", Schema::array(Schema::string())),
            ("hashtags", Schema::array(Schema::string())),
            ("effort", Schema::string_enum(ProductionEffort::ALL)),
            (
                "scores",
                Schema::object(
                    vec![
                        ("relevance", Schema::number()),
                        ("novelty", Schema::number()),
                        ("engagement_potential", Schema::number()),
                        ("production_fit", Schema::number()),
                    ],
                    &[
                        "relevance",
                        "novelty",
                        "engagement_potential",
                        "production_fit",
                    ],
                ),
            ),
            ("warnings", Schema::array(Schema::string())),
        ],
        &[
            "hooks",
            "summary",
            "unique_angle",
            "outline",
            "cta",
            "keywords",
            "hashtags",
            "effort",
            "scores",
            "warnings",
        ],
    );
    Schema::object(vec![("ideas", Schema::array(idea))], &["ideas"])
}

pub fn build(request: &IdeaRequest) -> PromptSpec {
    let cta_rule = if request.include_cta {
        "Hasilkan Call-to-Action (CTA) yang relevan."
    } else {
        "Jangan sertakan Call-to-Action (CTA)."
    };
    let hashtag_rule = if request.include_hashtags {
        "Hasilkan kata kunci dan hashtag yang relevan."
    } else {
        "Jangan sertakan kata kunci atau hashtag."
    };

    let user_prompt = format!(
        r#"Berikut adalah konteks untuk ide konten yang saya butuhkan:
- Industri: {industry}
- Sub-niche: {sub_niche}
- Format Konten: {content_format}
- Segmen Audiens: {audience_segment}
- Level Audiens: {audience_level}
- Geografis Audiens: {audience_geo}
- Tujuan Utama Konten: {content_goal}
- Tag Brand Voice: {brand_voice}
- Tingkat Kedalaman Konten: {depth_level}
- Topik yang Dihindari (Blacklist): {blacklist}
- Tingkat Risiko/Variasi Ide: {risk_level}

Tolong hasilkan {idea_count} ide konten berdasarkan konteks ini.

Aturan Ketat:
1. Gunakan gaya bahasa Indonesia yang santai dan mudah dimengerti (sehari-hari).
2. Setiap ide harus berakar pada masalah mikro atau keinginan konkret dalam sub-niche yang ditentukan.
3. Output harus menyertakan 3 hook yang berbeda, ringkasan, sudut pandang unik, dan outline langkah-demi-langkah untuk setiap ide.
4. Outline harus realistis dan dapat dieksekusi.
5. {cta_rule}
6. {hashtag_rule}
7. Benar-benar hindari topik dalam daftar hitam dan konten motivasi yang samar dan generik.
8. Untuk industri 'kesehatan' atau 'keuangan', tambahkan peringatan seperti "Konten ini untuk tujuan edukasi dan bukan merupakan nasihat profesional."
"#,
        industry = request.industry_text(),
        sub_niche = request.sub_niche,
        content_format = request.content_format_text(),
        audience_segment = request.audience_segment,
        audience_level = request.audience_level,
        audience_geo = request.audience_geo,
        content_goal = request.content_goal_text(),
        brand_voice = request.brand_voice_tags.join(", "),
        depth_level = request.depth_level,
        blacklist = request.blacklist_topics.join(", "),
        risk_level = request.risk_level,
        idea_count = request.idea_count,
    );

    PromptSpec::new(SYSTEM_INSTRUCTION, user_prompt).with_schema(response_schema())
}
