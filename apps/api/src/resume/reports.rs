pub const CANNED_REPORTS: [&str; 2] = [SUMMARY_REVIEW, SCORED_REVIEW];

const SUMMARY_REVIEW: &str = "**Resume Analysis Summary**

**Strengths:**
✅ Strong technical skills section with relevant technologies
✅ Clear work experience with quantifiable achievements
✅ Good use of action verbs and specific metrics
✅ Clean, professional formatting

**Areas for Improvement:**
⚠️ Consider adding more keywords related to your target role
⚠️ Include a brief professional summary at the top
⚠️ Add more specific project outcomes and impact metrics
⚠️ Consider reorganizing sections for better flow

**Recommendations:**
🎯 Tailor your resume for each application
🎯 Use industry-specific keywords from job descriptions
🎯 Quantify achievements with numbers and percentages
🎯 Keep it to 1-2 pages maximum

**ATS Compatibility Score: 85/100**
Your resume should pass most Applicant Tracking Systems, but consider optimizing keyword density for better matching.";

const SCORED_REVIEW: &str = "**AI-Powered Resume Review**

**Overall Score: B+ (87/100)**

**What's Working Well:**
✅ Professional experience clearly demonstrates growth
✅ Skills section aligns with current market demands
✅ Education and certifications are relevant
✅ Contact information is complete and professional

**Critical Improvements Needed:**
🔧 Add a compelling professional summary (2-3 lines)
🔧 Include more metrics and quantifiable results
🔧 Optimize for ATS with better keyword integration
🔧 Consider adding relevant project portfolio links

**Industry-Specific Feedback:**
🎯 For tech roles: Emphasize problem-solving and collaboration
🎯 Include specific technologies used in each role
🎯 Mention agile/scrum experience if applicable
🎯 Add GitHub or portfolio links

**Next Steps:**
1. Rewrite your summary section
2. Add 2-3 more quantified achievements
3. Research keywords from target job postings
4. Update with recent technologies/frameworks";
